use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Locale-independent weekday token (`mon`..`sun`).
///
/// Variant order is chronological starting on Monday, so `Ord` sorts a
/// selection the way it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayCode {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl WeekdayCode {
    /// All codes in chronological order.
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mon => "mon",
            Self::Tue => "tue",
            Self::Wed => "wed",
            Self::Thu => "thu",
            Self::Fri => "fri",
            Self::Sat => "sat",
            Self::Sun => "sun",
        }
    }

    /// Zero-based position in the week, Monday being 0.
    #[must_use]
    pub const fn days_from_monday(self) -> u32 {
        match self {
            Self::Mon => 0,
            Self::Tue => 1,
            Self::Wed => 2,
            Self::Thu => 3,
            Self::Fri => 4,
            Self::Sat => 5,
            Self::Sun => 6,
        }
    }
}

impl std::fmt::Display for WeekdayCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekdayCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| CoreError::ParseError(format!("unknown weekday code: {s:?}")))
    }
}

impl From<WeekdayCode> for chrono::Weekday {
    fn from(code: WeekdayCode) -> Self {
        match code {
            WeekdayCode::Mon => Self::Mon,
            WeekdayCode::Tue => Self::Tue,
            WeekdayCode::Wed => Self::Wed,
            WeekdayCode::Thu => Self::Thu,
            WeekdayCode::Fri => Self::Fri,
            WeekdayCode::Sat => Self::Sat,
            WeekdayCode::Sun => Self::Sun,
        }
    }
}

impl From<chrono::Weekday> for WeekdayCode {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Mon,
            chrono::Weekday::Tue => Self::Tue,
            chrono::Weekday::Wed => Self::Wed,
            chrono::Weekday::Thu => Self::Thu,
            chrono::Weekday::Fri => Self::Fri,
            chrono::Weekday::Sat => Self::Sat,
            chrono::Weekday::Sun => Self::Sun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_tokens_only() {
        assert_eq!("wed".parse::<WeekdayCode>().ok(), Some(WeekdayCode::Wed));
        assert!("Wed".parse::<WeekdayCode>().is_err());
        assert!(matches!("xyz".parse::<WeekdayCode>(), Err(CoreError::ParseError(_))));
    }

    #[test]
    fn sorts_chronologically() {
        let mut days = vec![WeekdayCode::Sun, WeekdayCode::Wed, WeekdayCode::Mon];
        days.sort();
        assert_eq!(
            days,
            vec![WeekdayCode::Mon, WeekdayCode::Wed, WeekdayCode::Sun]
        );
    }

    #[test]
    fn serde_uses_lowercase_tokens() {
        let json = serde_json::to_string(&WeekdayCode::Fri).unwrap();
        assert_eq!(json, "\"fri\"");
        let back: WeekdayCode = serde_json::from_str("\"sat\"").unwrap();
        assert_eq!(back, WeekdayCode::Sat);
    }

    #[test]
    fn chrono_conversion_round_trips() {
        for code in WeekdayCode::ALL {
            let day: chrono::Weekday = code.into();
            assert_eq!(WeekdayCode::from(day), code);
            assert_eq!(day.num_days_from_monday(), code.days_from_monday());
        }
    }
}
