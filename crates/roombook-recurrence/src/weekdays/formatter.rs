use icu::calendar::Date;
use icu::datetime::DateTimeFormatter;
use icu::datetime::fieldsets::E;
use icu::list::ListFormatter;
use icu::list::options::{ListFormatterOptions, ListLength};
use icu::locale::Locale;
use roombook_core::types::{Recurrence, WeekdayCode};

use crate::error::{RecurrenceError, RecurrenceResult};

/// Input of [`WeekdayFormatter::render`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderRequest<'a> {
    /// Raw weekday codes, in any order.
    pub weekdays: Option<&'a [&'a str]>,
    /// Repeat count in weeks; `Some(1)` or more selects the "Every N weeks on" form.
    pub repetition: Option<u32>,
    /// Render only the joined weekday names.
    pub weekdays_only: bool,
}

impl<'a> RenderRequest<'a> {
    #[must_use]
    pub const fn new(weekdays: &'a [&'a str]) -> Self {
        Self {
            weekdays: Some(weekdays),
            repetition: None,
            weekdays_only: false,
        }
    }

    #[must_use]
    pub const fn with_repetition(mut self, repetition: u32) -> Self {
        self.repetition = Some(repetition);
        self
    }

    #[must_use]
    pub const fn weekdays_only(mut self) -> Self {
        self.weekdays_only = true;
        self
    }
}

/// Weekday phrase renderer bound to one locale.
#[derive(Debug)]
pub struct WeekdayFormatter {
    locale: Locale,
    /// Wide weekday names, Monday first.
    names: Vec<String>,
    list: ListFormatter,
}

impl WeekdayFormatter {
    /// ## Summary
    /// Loads weekday names and the conjunction list pattern for `locale`.
    ///
    /// ## Errors
    /// Returns `RecurrenceError::LocaleData` if the locale data cannot be loaded.
    pub fn try_new(locale: &Locale) -> RecurrenceResult<Self> {
        let list = ListFormatter::try_new_and(
            locale.clone().into(),
            ListFormatterOptions::default().with_length(ListLength::Wide),
        )
        .map_err(|err| RecurrenceError::LocaleData(format!("list patterns for {locale}: {err}")))?;

        let dates = DateTimeFormatter::try_new(locale.clone().into(), E::long()).map_err(|err| {
            RecurrenceError::LocaleData(format!("weekday names for {locale}: {err}"))
        })?;

        // 2024-01-01 is a Monday
        let names = WeekdayCode::ALL
            .into_iter()
            .map(|code| {
                let day = 1 + u8::try_from(code.days_from_monday())
                    .map_err(|_err| RecurrenceError::LocaleData(format!("no date for {code}")))?;
                let date = Date::try_new_iso(2024, 1, day)
                    .map_err(|err| RecurrenceError::LocaleData(format!("{code}: {err}")))?;
                Ok(dates.format(&date).to_string())
            })
            .collect::<RecurrenceResult<Vec<String>>>()?;

        tracing::debug!(%locale, ?names, "Loaded weekday formatter");

        Ok(Self {
            locale: locale.clone(),
            names,
            list,
        })
    }

    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Localized wide name of a weekday.
    #[must_use]
    pub fn weekday_name(&self, code: WeekdayCode) -> &str {
        &self.names[code.days_from_monday() as usize]
    }

    /// ## Summary
    /// Renders a human-readable phrase for a set of weekday codes.
    ///
    /// Returns `None` when there are no weekdays or when any code is not one
    /// of the seven canonical tokens.
    #[must_use]
    pub fn render(&self, request: &RenderRequest<'_>) -> Option<String> {
        let codes = canonical_weekdays(request.weekdays?)?;
        let joined = self
            .list
            .format_to_string(codes.iter().map(|code| self.weekday_name(*code)));

        let phrase = match request.repetition {
            Some(1) => format!("Every week on {joined}"),
            Some(weeks) if weeks > 1 => format!("Every {weeks} weeks on {joined}"),
            _ if request.weekdays_only => joined,
            _ => format!("Every {joined}"),
        };
        Some(phrase)
    }

    /// ## Summary
    /// Renders the weekday phrase of a recurrence descriptor.
    ///
    /// Only weekly recurrences have one; the descriptor's repeat count is
    /// used as the repetition.
    #[must_use]
    pub fn describe(&self, recurrence: &Recurrence) -> Option<String> {
        if !recurrence.selects_weekdays() {
            return None;
        }
        let codes: Vec<&str> = recurrence.weekdays.iter().map(|code| code.as_str()).collect();
        self.render(&RenderRequest::new(&codes).with_repetition(recurrence.number))
    }
}

/// ## Summary
/// Parses weekday codes and sorts them Monday first.
///
/// Duplicates are kept. A single unknown code invalidates the whole list.
#[must_use]
pub fn canonical_weekdays(raw: &[&str]) -> Option<Vec<WeekdayCode>> {
    if raw.is_empty() {
        return None;
    }

    let mut codes = raw
        .iter()
        .map(|code| code.parse::<WeekdayCode>())
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| tracing::warn!(error = %err, ?raw, "Rejecting weekday list"))
        .ok()?;
    codes.sort_unstable();
    Some(codes)
}
