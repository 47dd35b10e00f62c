use std::sync::{PoisonError, RwLock};

use icu::locale::Locale;

use super::{RenderRequest, WeekdayFormatter};
use crate::error::{RecurrenceError, RecurrenceResult};

/// ## Summary
/// Parses a locale tag.
///
/// Accepts BCP-47 tags (`en-GB`) as well as the underscore form the server
/// uses for its language settings (`en_GB`).
///
/// ## Errors
/// Returns `RecurrenceError::InvalidLocale` if the tag is not well-formed.
pub fn parse_locale(tag: &str) -> RecurrenceResult<Locale> {
    let normalized = tag.trim().replace('_', "-");
    normalized
        .parse::<Locale>()
        .map_err(|err| RecurrenceError::InvalidLocale(format!("{tag:?}: {err}")))
}

/// Active locale of a user session.
///
/// The locale can be switched at any time; every render call works on a
/// snapshot taken when the call starts.
#[derive(Debug)]
pub struct LocaleContext {
    active: RwLock<Locale>,
}

impl LocaleContext {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self {
            active: RwLock::new(locale),
        }
    }

    /// ## Errors
    /// Returns `RecurrenceError::InvalidLocale` if the tag is not well-formed.
    pub fn from_tag(tag: &str) -> RecurrenceResult<Self> {
        Ok(Self::new(parse_locale(tag)?))
    }

    /// ## Summary
    /// Switches the active locale.
    ///
    /// ## Errors
    /// Returns `RecurrenceError::InvalidLocale` if the tag is not well-formed;
    /// the active locale is unchanged in that case.
    pub fn set_locale(&self, tag: &str) -> RecurrenceResult<()> {
        let locale = parse_locale(tag)?;
        tracing::debug!(%locale, "Switching active locale");
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = locale;
        Ok(())
    }

    /// Copy of the currently active locale.
    #[must_use]
    pub fn snapshot(&self) -> Locale {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// ## Summary
    /// Builds a formatter for the currently active locale.
    ///
    /// ## Errors
    /// Returns `RecurrenceError::LocaleData` if the locale data cannot be loaded.
    pub fn formatter(&self) -> RecurrenceResult<WeekdayFormatter> {
        WeekdayFormatter::try_new(&self.snapshot())
    }
}

/// ## Summary
/// Renders a weekday phrase in the context's active locale.
///
/// Returns `Ok(None)` when there is nothing to render (no weekdays or an
/// unknown weekday code).
///
/// ## Errors
/// Returns `RecurrenceError::LocaleData` if the locale data cannot be loaded.
pub fn render_recurrence_weekdays(
    context: &LocaleContext,
    request: &RenderRequest<'_>,
) -> RecurrenceResult<Option<String>> {
    Ok(context.formatter()?.render(request))
}
