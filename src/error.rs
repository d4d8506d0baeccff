use thiserror::Error;

/// Errors raised while building or rendering a relative date
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("Unknown timezone: {0:?}")]
    UnknownTimezone(String),
}

/// Result type alias for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;
