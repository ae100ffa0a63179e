use std::fmt;
use trv_types::FormatError;

/// Result type for trv-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// Input text violates the record format
    Format(FormatError),

    /// IO operation failed
    Io(std::io::Error),

    /// JSON encoding or decoding failed
    Json(serde_json::Error),

    /// CSV encoding failed
    Csv(csv::Error),

    /// Imported data violates a record invariant
    Invalid(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Wrapped errors are reported through `source()`.
            Error::Format(_) => write!(f, "malformed TRV input"),
            Error::Io(_) => write!(f, "I/O error"),
            Error::Json(_) => write!(f, "JSON error"),
            Error::Csv(_) => write!(f, "CSV error"),
            Error::Invalid(msg) => write!(f, "invalid record: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Format(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Invalid(_) => None,
        }
    }
}

impl From<FormatError> for Error {
    fn from(err: FormatError) -> Self {
        Error::Format(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
