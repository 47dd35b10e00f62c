//! Wire format helpers for dates and times.
//!
//! ## Summary
//! The booking API exchanges calendar dates as `YYYY-MM-DD`, times of day as
//! `HH:MM` and the combination of both as `YYYY-MM-DD HH:MM`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::{WIRE_DATE_FORMAT, WIRE_DATETIME_FORMAT, WIRE_TIME_FORMAT};
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Parses a `YYYY-MM-DD` date.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the value is not a valid calendar date.
pub fn parse_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value, WIRE_DATE_FORMAT)
        .map_err(|err| CoreError::ParseError(format!("invalid date {value:?}: {err}")))
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// ## Summary
/// Parses an `HH:MM` time of day.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the value is not a valid time.
pub fn parse_time(value: &str) -> CoreResult<NaiveTime> {
    NaiveTime::parse_from_str(value, WIRE_TIME_FORMAT)
        .map_err(|err| CoreError::ParseError(format!("invalid time {value:?}: {err}")))
}

#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format(WIRE_TIME_FORMAT).to_string()
}

/// Formats a date and time of day as a `start_dt`/`end_dt` parameter.
#[must_use]
pub fn format_datetime(date: NaiveDate, time: NaiveTime) -> String {
    NaiveDateTime::new(date, time)
        .format(WIRE_DATETIME_FORMAT)
        .to_string()
}

/// Serde adapter for `Option<NaiveTime>` in `HH:MM` form.
pub mod optional_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// ## Errors
    /// Propagates serializer errors.
    #[expect(clippy::ref_option, reason = "signature required by serde(with)")]
    pub fn serialize<S: Serializer>(
        value: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.serialize_str(&super::format_time(*time)),
            None => serializer.serialize_none(),
        }
    }

    /// ## Errors
    /// Fails when the value is neither `null` nor an `HH:MM` string.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_time(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_round_trip() {
        let date = parse_date("2024-02-29").unwrap();
        assert_eq!(format_date(date), "2024-02-29");
    }

    #[test]
    fn rejects_invalid_dates() {
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("01/02/2024").is_err());
    }

    #[test]
    fn formats_datetime_parameter() {
        let date = parse_date("2024-01-01").unwrap();
        let time = parse_time("08:05").unwrap();
        assert_eq!(format_datetime(date, time), "2024-01-01 08:05");
    }
}
