//! Error types for the trellis library.

use thiserror::Error;

/// Main error type for trellis operations.
#[derive(Debug, Error)]
pub enum TrellisError {
    /// A numeric value was demanded from a non-numeric cell.
    #[error("Not a numeric value: '{value}'")]
    NonNumeric {
        value: String,
    },

    /// Empty input or no data to build a table from.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for trellis operations.
pub type Result<T> = std::result::Result<T, TrellisError>;
