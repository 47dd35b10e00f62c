use roombook_core::types::BookingFilters;

use super::{end_dt, repeat_frequency, repeat_interval, start_dt};
use crate::params::{ParameterRule, ParameterRuleTable, to_param};

/// ## Summary
/// Rules turning the room search filters into `available_rooms` parameters.
#[must_use]
pub fn room_filter_rules() -> ParameterRuleTable<BookingFilters> {
    ParameterRuleTable::new()
        .with(
            "text",
            ParameterRule::transform(|filters: &BookingFilters| to_param(&filters.text)),
        )
        .with(
            "capacity",
            ParameterRule::transform(|filters: &BookingFilters| to_param(filters.capacity)),
        )
        .with(
            "favorite",
            ParameterRule::conditional(
                |filters: &BookingFilters| filters.only_favorites,
                |_: &BookingFilters| to_param(true),
            ),
        )
        .with(
            "mine",
            ParameterRule::conditional(
                |filters: &BookingFilters| filters.only_mine,
                |_: &BookingFilters| to_param(true),
            ),
        )
        .with(
            "equipment",
            ParameterRule::conditional(
                |filters: &BookingFilters| !filters.equipment.is_empty(),
                |filters: &BookingFilters| to_param(&filters.equipment),
            ),
        )
        .with(
            "building",
            ParameterRule::transform(|filters: &BookingFilters| to_param(&filters.building)),
        )
        .with(
            "floor",
            ParameterRule::transform(|filters: &BookingFilters| to_param(&filters.floor)),
        )
        .with("start_dt", start_dt())
        .with("end_dt", end_dt())
        .with("repeat_frequency", repeat_frequency())
        .with("repeat_interval", repeat_interval())
}
