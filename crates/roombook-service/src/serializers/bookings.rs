use roombook_core::types::BookingFilters;

use super::{end_dt, repeat_frequency, repeat_interval, start_dt};
use crate::params::{ParameterRule, ParameterRuleTable, to_param};

/// ## Summary
/// Rules turning a booking form into `create_booking` parameters.
///
/// The weekday selection is only sent for weekly recurrences that have one.
#[must_use]
pub fn booking_rules() -> ParameterRuleTable<BookingFilters> {
    ParameterRuleTable::new()
        .with(
            "room_id",
            ParameterRule::transform(|filters: &BookingFilters| to_param(filters.room_id)),
        )
        .with(
            "reason",
            ParameterRule::transform(|filters: &BookingFilters| to_param(&filters.reason)),
        )
        .with("start_dt", start_dt())
        .with("end_dt", end_dt())
        .with("repeat_frequency", repeat_frequency())
        .with("repeat_interval", repeat_interval())
        .with(
            "recurrence_weekdays",
            ParameterRule::conditional(
                |filters: &BookingFilters| {
                    filters.recurrence.selects_weekdays() && !filters.recurrence.weekdays.is_empty()
                },
                |filters: &BookingFilters| {
                    let mut weekdays = filters.recurrence.weekdays.clone();
                    weekdays.sort_unstable();
                    to_param(weekdays)
                },
            ),
        )
}
