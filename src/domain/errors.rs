//! Domain errors for the logbridge adapter.

use thiserror::Error;

/// Errors reported by the logger adapter and its backends.
///
/// Misuse of the logger contract (bad verbosity, malformed key/value
/// sequences, a missing backend) is returned to the caller instead of
/// aborting, so call sites can decide whether to recover.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("a backend must be provided to construct a logger")]
    MissingBackend,

    #[error("invalid log level [{0}] is set")]
    InvalidVerbosity(i32),

    #[error("key/value sequence has odd length {0}")]
    OddKeyValues(usize),

    #[error("key [{key}] at position {index} is not a string type")]
    NonStringKey { index: usize, key: String },

    #[error("Invalid log level: {0}")]
    UnknownLevel(String),

    #[error("timestamp format [{0}] is not a valid strftime format")]
    InvalidTimestampFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("failed to write log entry: {0}")]
    Write(#[from] std::io::Error),
}

pub type LogResult<T> = Result<T, LogError>;

impl From<serde_json::Error> for LogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
