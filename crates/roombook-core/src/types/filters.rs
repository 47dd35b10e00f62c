use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Recurrence;
use crate::util::wire;

/// Booking period in calendar dates.
///
/// `end_date` is `None` for single bookings and, transiently, for recurring
/// ones whose default span has not been computed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    #[must_use]
    pub const fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    #[must_use]
    pub const fn starting(start_date: NaiveDate) -> Self {
        Self::new(Some(start_date), None)
    }
}

/// Time-of-day window applied to every occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[serde(default, with = "wire::optional_time")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "wire::optional_time")]
    pub end_time: Option<NaiveTime>,
}

/// Caller-owned filter state of the room search / booking form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFilters {
    #[serde(default)]
    pub dates: DateRange,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default)]
    pub time_slot: TimeSlot,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub only_favorites: bool,
    #[serde(default)]
    pub only_mine: bool,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub floor: Option<String>,
    #[serde(default)]
    pub room_id: Option<u64>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl BookingFilters {
    #[must_use]
    pub fn new(dates: DateRange, recurrence: Recurrence) -> Self {
        Self {
            dates,
            recurrence,
            ..Self::default()
        }
    }
}
