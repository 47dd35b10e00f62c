use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Rule for parameter `{field}` failed: {source}")]
    RuleError {
        field: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    RecurrenceError(#[from] roombook_recurrence::error::RecurrenceError),

    #[error(transparent)]
    CoreError(#[from] roombook_core::error::CoreError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
