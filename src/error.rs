use std::path::PathBuf;
use taskpulse_core::CoreError;
use thiserror::Error;

/// Error types for the `tp` binary
#[derive(Error, Debug)]
pub enum CliError {
    /// Error from the ranking core (validation, parsing, lookup)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Error reading the task file
    #[error("Failed to read task file at {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `--now` could not be parsed
    #[error("Invalid --now timestamp '{value}'")]
    InvalidNow { value: String },

    /// Error encoding command output as JSON
    #[error("Failed to encode output")]
    Encode(#[source] serde_json::Error),
}

impl CliError {
    /// Get the full error message including nested error details.
    pub fn full_message(&self) -> String {
        match self {
            CliError::Core(err) => err.full_message(),
            CliError::Encode(err) => format!("Failed to encode output: {}", err),
            other => other.to_string(),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;
