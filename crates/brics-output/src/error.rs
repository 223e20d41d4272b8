//! Error types for template merge and output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while merging mapped rows into the template or writing it.
#[derive(Debug, Error)]
pub enum OutputError {
    /// A mapped column has no counterpart in the template header.
    #[error("mapped column '{column}' is not present in the template")]
    ColumnMismatch { column: String },

    /// Failed to create the output directory or file.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize CSV records.
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
