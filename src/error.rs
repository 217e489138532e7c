//! Error types for habitual.

use thiserror::Error;

/// Errors that can occur in habitual operations.
///
/// Unknown habit ids are not errors: operations report them as explicit
/// outcomes (`UpdateOutcome::NotFound`, `MarkOutcome::NotFound`) and the CLI
/// boundary prints a message.
#[derive(Debug, Error)]
pub enum HabitualError {
    /// I/O failure reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failure.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration problem (missing home directory, bad config file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persistence failure outside plain I/O.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for HabitualError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
