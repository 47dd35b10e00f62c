use serde::{Deserialize, Serialize};

use super::WeekdayCode;

/// How a booking repeats, as selected in the booking form.
///
/// Unrecognized values are kept as `Unknown` instead of failing to
/// deserialize; downstream code treats them permissively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecurrenceType {
    #[default]
    Single,
    Daily,
    Every,
    Unknown(String),
}

impl RecurrenceType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Single => "single",
            Self::Daily => "daily",
            Self::Every => "every",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for RecurrenceType {
    fn from(value: &str) -> Self {
        match value {
            "single" => Self::Single,
            "daily" => Self::Daily,
            "every" => Self::Every,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl From<String> for RecurrenceType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<RecurrenceType> for String {
    fn from(value: RecurrenceType) -> Self {
        match value {
            RecurrenceType::Unknown(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit of an `every` recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceInterval {
    #[default]
    Week,
    Month,
}

impl RecurrenceInterval {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

/// UI-level recurrence descriptor.
///
/// `number` and `interval` only carry meaning for [`RecurrenceType::Every`];
/// `weekdays` only for `every`/`week`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    #[serde(rename = "type", default)]
    pub kind: RecurrenceType,
    #[serde(default = "default_number")]
    pub number: u32,
    #[serde(default)]
    pub interval: RecurrenceInterval,
    #[serde(default)]
    pub weekdays: Vec<WeekdayCode>,
}

const fn default_number() -> u32 {
    1
}

impl Default for Recurrence {
    fn default() -> Self {
        Self {
            kind: RecurrenceType::Single,
            number: default_number(),
            interval: RecurrenceInterval::Week,
            weekdays: Vec::new(),
        }
    }
}

impl Recurrence {
    #[must_use]
    pub fn single() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn daily() -> Self {
        Self {
            kind: RecurrenceType::Daily,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn every_week(number: u32, weekdays: Vec<WeekdayCode>) -> Self {
        Self {
            kind: RecurrenceType::Every,
            number,
            interval: RecurrenceInterval::Week,
            weekdays,
        }
    }

    #[must_use]
    pub fn every_month(number: u32) -> Self {
        Self {
            kind: RecurrenceType::Every,
            number,
            interval: RecurrenceInterval::Month,
            weekdays: Vec::new(),
        }
    }

    /// Whether the weekday selection is meaningful for this descriptor.
    #[must_use]
    pub fn selects_weekdays(&self) -> bool {
        self.kind == RecurrenceType::Every && self.interval == RecurrenceInterval::Week
    }
}
