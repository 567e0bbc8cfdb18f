//! Error types for feed output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a processed feed.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Extension is neither CSV nor XLSX.
    #[error("unsupported output format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Failed to write a delimited file.
    #[error("failed to write CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },

    /// Failed to build or save a workbook.
    #[error("failed to write workbook {path}: {message}")]
    WorkbookWrite { path: PathBuf, message: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for OutputError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
