//! Error types for magicsniff.
//!
//! Sniffing itself is total and never fails; errors only surface from the
//! opt-in checked registration path and from configuration loading.

use thiserror::Error;

/// Main error type for magicsniff operations.
#[derive(Debug, Error)]
pub enum SniffError {
    /// MIME type string rejected by the media-type grammar
    #[error("Invalid MIME type {input:?}: {reason}")]
    InvalidMimeType { input: String, reason: String },

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// File I/O errors (configuration files only)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SniffError {
    fn from(err: serde_json::Error) -> Self {
        SniffError::Serialization(err.to_string())
    }
}

/// Result type alias for magicsniff operations
pub type Result<T> = std::result::Result<T, SniffError>;

/// Convert sniff errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<SniffError> for pyo3::PyErr {
    fn from(err: SniffError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyException, PyIOError, PyValueError};

        match err {
            SniffError::Io(e) => PyIOError::new_err(e.to_string()),
            SniffError::InvalidMimeType { .. } | SniffError::Config(_) => {
                PyValueError::new_err(err.to_string())
            }
            _ => PyException::new_err(err.to_string()),
        }
    }
}
