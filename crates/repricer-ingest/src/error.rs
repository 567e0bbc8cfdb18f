//! Error types for vendor feed ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading feed or configuration files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found or not a regular file.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension is neither a delimited nor a spreadsheet format we read.
    #[error("unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Failed to parse a delimited file.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read a spreadsheet workbook.
    #[error("failed to read workbook {path}: {message}")]
    WorkbookRead { path: PathBuf, message: String },

    /// Workbook has no sheets to read.
    #[error("workbook has no sheets: {path}")]
    EmptyWorkbook { path: PathBuf },

    /// Required column not found in a configuration file.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Invalid value in a configuration field.
    #[error("invalid {field} value '{value}' in {path}")]
    InvalidValue {
        field: String,
        value: String,
        path: PathBuf,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
