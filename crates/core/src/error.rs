use thiserror::Error;

/// Error types for the taskpulse core
#[derive(Error, Debug)]
pub enum CoreError {
    /// A timestamp field on a task record could not be parsed
    #[error("Task '{task_id}' has an invalid {field} timestamp: '{value}'")]
    InvalidTimestamp {
        task_id: String,
        field: &'static str,
        value: String,
    },

    /// Text that does not name a member of a closed enumeration
    /// (priority, category, status filter, sort order)
    #[error("invalid {kind} '{value}'. Valid values: {expected}")]
    InvalidValue {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Error when a requested task was not found
    #[error("Task '{task_id}' not found")]
    NotFound { task_id: String },

    /// Error for invalid input or validation failure
    #[error("{message}")]
    Validation { message: String },

    /// Error decoding a task export
    #[error("Failed to decode task records")]
    Parse(#[source] serde_json::Error),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Parse(err)
    }
}

impl CoreError {
    /// Get the full error message including nested decode error details.
    pub fn full_message(&self) -> String {
        match self {
            CoreError::Parse(err) => format!("Failed to decode task records: {}", err),
            other => other.to_string(),
        }
    }

    /// Shorthand for building a validation error
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
