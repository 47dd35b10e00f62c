//! Rule tables for the room-booking API endpoints.

mod bookings;
mod filters;

pub use bookings::booking_rules;
pub use filters::room_filter_rules;

use chrono::NaiveTime;
use roombook_core::types::BookingFilters;
use roombook_core::util::wire;
use roombook_recurrence::descriptor::from_descriptor;

use crate::params::{ParameterRule, to_param};

/// Start of the time slot when none was picked.
const DAY_START: NaiveTime = NaiveTime::MIN;

/// End of the time slot when none was picked.
fn day_end() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN)
}

/// `start_dt`: first day of the period at the slot start.
fn start_dt() -> ParameterRule<BookingFilters> {
    ParameterRule::conditional(
        |filters: &BookingFilters| filters.dates.start_date.is_some(),
        |filters: &BookingFilters| {
            to_param(filters.dates.start_date.map(|date| {
                wire::format_datetime(date, filters.time_slot.start_time.unwrap_or(DAY_START))
            }))
        },
    )
}

/// `end_dt`: last day of the period (the start day for single bookings) at the slot end.
fn end_dt() -> ParameterRule<BookingFilters> {
    ParameterRule::conditional(
        |filters: &BookingFilters| filters.dates.start_date.is_some(),
        |filters: &BookingFilters| {
            let dates = filters.dates;
            to_param(dates.end_date.or(dates.start_date).map(|date| {
                wire::format_datetime(date, filters.time_slot.end_time.unwrap_or_else(day_end))
            }))
        },
    )
}

fn repeat_frequency() -> ParameterRule<BookingFilters> {
    ParameterRule::transform(|filters: &BookingFilters| {
        from_descriptor(&filters.recurrence)
            .map(|(frequency, _)| to_param(frequency))
            .transpose()
            .map(Option::flatten)
    })
}

fn repeat_interval() -> ParameterRule<BookingFilters> {
    ParameterRule::transform(|filters: &BookingFilters| {
        from_descriptor(&filters.recurrence)
            .map(|(_, interval)| to_param(interval))
            .transpose()
            .map(Option::flatten)
    })
}
