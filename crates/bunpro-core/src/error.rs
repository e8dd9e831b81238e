//! Error types for bunpro-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bunpro-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open or read the source export
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write the destination file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV/TSV error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The export does not have the expected number of columns
    #[error("expected {expected} columns in '{path}', found {found}")]
    SchemaMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// A stage referenced a column the table does not have
    #[error("column '{0}' not found")]
    MissingColumn(String),

    /// A surviving row has no merged examples for its grammar point
    #[error("no examples collected for grammar point '{0}'")]
    MissingGroup(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
