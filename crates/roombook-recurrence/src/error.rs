use thiserror::Error;

/// Recurrence and locale errors
#[derive(Error, Debug)]
pub enum RecurrenceError {
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Locale data unavailable: {0}")]
    LocaleData(String),

    #[error("Booking period has no start date")]
    MissingStartDate,

    #[error("Recurring booking period has no end date")]
    MissingEndDate,

    #[error("Unsupported repeat interval: {0}")]
    InvalidInterval(u32),

    #[error("RRule error: {0}")]
    RRuleError(#[from] rrule::RRuleError),

    #[error(transparent)]
    CoreError(#[from] roombook_core::error::CoreError),
}

pub type RecurrenceResult<T> = std::result::Result<T, RecurrenceError>;
