use thiserror::Error;

/// Application-level errors (request handling)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] roombook_service::error::ServiceError),

    #[error(transparent)]
    RecurrenceError(#[from] roombook_recurrence::error::RecurrenceError),

    #[error(transparent)]
    CoreError(#[from] roombook_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
