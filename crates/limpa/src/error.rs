//! Error types for the Limpa library.
//!
//! Only the collaborators around the normalization core can fail: reading the
//! source file, loading a vocabulary and writing the export. Classification and
//! value formatting never return errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Limpa operations.
#[derive(Debug, Error)]
pub enum LimpaError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Empty file or no rows to process.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Limpa operations.
pub type Result<T> = std::result::Result<T, LimpaError>;
