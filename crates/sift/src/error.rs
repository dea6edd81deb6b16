//! Error types for the sift library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sift operations.
#[derive(Debug, Error)]
pub enum SiftError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file, zero columns, or no data rows to classify.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A requested column name is absent from the table.
    #[error("Invalid column: '{0}' not found in table")]
    InvalidColumn(String),

    /// Any other failure during ingestion or processing.
    #[error("Processing error: {0}")]
    Processing(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for sift operations.
pub type Result<T> = std::result::Result<T, SiftError>;
