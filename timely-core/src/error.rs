//! Error types for the Timely ecosystem.

use thiserror::Error;

/// Errors that can occur in Timely operations.
#[derive(Error, Debug)]
pub enum TimelyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid event id: {0:?}")]
    InvalidEventId(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Backend request timed out after {0}s")]
    BackendTimeout(u64),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Timely operations.
pub type TimelyResult<T> = Result<T, TimelyError>;
