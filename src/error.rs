//! Error types for idrtools

use thiserror::Error;

/// Result type alias for idrtools operations
pub type Result<T> = std::result::Result<T, IdrError>;

/// Error types that can occur in idrtools
#[derive(Debug, Error)]
pub enum IdrError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid flDPnn2 stride report structure
    #[error("Invalid stride report at line {line}: {msg}")]
    InvalidStrideFormat {
        /// Line number where error occurred
        line: usize,
        /// Error message
        msg: String,
    },

    /// Invalid region annotation report structure
    #[error("Invalid region report at line {line}: {msg}")]
    InvalidRegionFormat {
        /// Line number where error occurred
        line: usize,
        /// Error message
        msg: String,
    },

    /// A field failed type coercion
    #[error("Invalid value for '{field}' at line {line}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Line number where error occurred
        line: usize,
        /// Reason the token was rejected
        reason: String,
    },

    /// CSV input error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Plot rendering error
    #[cfg(feature = "plot")]
    #[error("Plot rendering error: {0}")]
    Plot(String),
}
