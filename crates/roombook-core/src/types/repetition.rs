use serde::{Deserialize, Serialize};

/// Repeat frequency as exchanged with the booking API.
///
/// The API speaks both the numeric codes of the reservation model
/// (`0..=3`) and the enum tokens (`NEVER`, `DAY`, `WEEK`, `MONTH`); the UI
/// additionally sends `single` for a one-off booking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawFrequency", into = "String")]
pub enum RepeatFrequency {
    Never,
    Day,
    Week,
    Month,
    /// Anything else, in its original textual form.
    Unknown(String),
}

impl RepeatFrequency {
    /// Token used in query parameters.
    #[must_use]
    pub fn as_token(&self) -> &str {
        match self {
            Self::Never => "NEVER",
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Unknown(raw) => raw,
        }
    }

    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Never,
            1 => Self::Day,
            2 => Self::Week,
            3 => Self::Month,
            other => Self::Unknown(other.to_string()),
        }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "NEVER" | "single" => Self::Never,
            "DAY" => Self::Day,
            "WEEK" => Self::Week,
            "MONTH" => Self::Month,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl std::fmt::Display for RepeatFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFrequency {
    Code(i64),
    Token(String),
}

impl From<RawFrequency> for RepeatFrequency {
    fn from(raw: RawFrequency) -> Self {
        match raw {
            RawFrequency::Code(code) => Self::from_code(code),
            RawFrequency::Token(token) => Self::from_token(&token),
        }
    }
}

impl From<RepeatFrequency> for String {
    fn from(value: RepeatFrequency) -> Self {
        match value {
            RepeatFrequency::Unknown(raw) => raw,
            known => known.as_token().to_owned(),
        }
    }
}

/// Positional `(frequency, interval, weekdays)` encoding of a recurrence.
///
/// On the wire this is a JSON array; the weekday element may be absent or
/// `null`. Weekday codes are kept as sent and only validated when the triple
/// is turned into a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTriple", into = "RawTriple")]
pub struct RepetitionTriple {
    pub frequency: RepeatFrequency,
    pub interval: u32,
    pub weekdays: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawTriple {
    Full(RepeatFrequency, u32, Option<Vec<String>>),
    Pair(RepeatFrequency, u32),
}

impl From<RawTriple> for RepetitionTriple {
    fn from(raw: RawTriple) -> Self {
        match raw {
            RawTriple::Full(frequency, interval, weekdays) => Self {
                frequency,
                interval,
                weekdays,
            },
            RawTriple::Pair(frequency, interval) => Self {
                frequency,
                interval,
                weekdays: None,
            },
        }
    }
}

impl From<RepetitionTriple> for RawTriple {
    fn from(triple: RepetitionTriple) -> Self {
        Self::Full(triple.frequency, triple.interval, triple.weekdays)
    }
}

impl RepetitionTriple {
    #[must_use]
    pub const fn new(
        frequency: RepeatFrequency,
        interval: u32,
        weekdays: Option<Vec<String>>,
    ) -> Self {
        Self {
            frequency,
            interval,
            weekdays,
        }
    }

    /// ## Summary
    /// Describes the frequency/interval pair the way the legacy booking pages did.
    ///
    /// Returns `None` for pairs those pages never offered (e.g. every four weeks).
    #[must_use]
    pub fn legacy_description(&self) -> Option<&'static str> {
        match (&self.frequency, self.interval) {
            (RepeatFrequency::Never, 0) => Some("Single reservation"),
            (RepeatFrequency::Day, 1) => Some("Repeat daily"),
            (RepeatFrequency::Week, 1) => Some("Repeat once a week"),
            (RepeatFrequency::Week, 2) => Some("Repeat once every two week"),
            (RepeatFrequency::Week, 3) => Some("Repeat once every three week"),
            (RepeatFrequency::Month, 1) => Some("Repeat every month"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_accepts_codes_and_tokens() {
        let parsed: Vec<RepeatFrequency> =
            serde_json::from_str(r#"[0, 1, "WEEK", "MONTH", "single", 9, "YEAR"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                RepeatFrequency::Never,
                RepeatFrequency::Day,
                RepeatFrequency::Week,
                RepeatFrequency::Month,
                RepeatFrequency::Never,
                RepeatFrequency::Unknown("9".into()),
                RepeatFrequency::Unknown("YEAR".into()),
            ]
        );
    }

    #[test]
    fn triple_weekdays_are_optional() {
        let pair: RepetitionTriple = serde_json::from_str("[3, 2]").unwrap();
        assert_eq!(pair, RepetitionTriple::new(RepeatFrequency::Month, 2, None));

        let full: RepetitionTriple = serde_json::from_str(r#"[2, 1, ["mon", "fri"]]"#).unwrap();
        assert_eq!(full.weekdays, Some(vec!["mon".to_owned(), "fri".to_owned()]));

        let unknown_day: RepetitionTriple = serde_json::from_str(r#"[2, 1, ["mon", "xyz"]]"#).unwrap();
        assert_eq!(unknown_day.frequency, RepeatFrequency::Week);
        assert_eq!(unknown_day.weekdays, Some(vec!["mon".to_owned(), "xyz".to_owned()]));

        let null_days: RepetitionTriple = serde_json::from_str("[2, 1, null]").unwrap();
        assert_eq!(null_days.weekdays, None);
    }

    #[test]
    fn triple_serializes_as_token_array() {
        let triple = RepetitionTriple::new(RepeatFrequency::Week, 2, None);
        assert_eq!(
            serde_json::to_value(&triple).unwrap(),
            serde_json::json!(["WEEK", 2, null])
        );
    }

    #[test]
    fn legacy_descriptions_cover_offered_pairs() {
        let weekly = RepetitionTriple::new(RepeatFrequency::Week, 2, None);
        assert_eq!(weekly.legacy_description(), Some("Repeat once every two week"));
        let odd = RepetitionTriple::new(RepeatFrequency::Week, 4, None);
        assert_eq!(odd.legacy_description(), None);
    }
}
