//! Error types for feed transformation.

use thiserror::Error;

/// Errors raised while validating or repricing a feed table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Required columns absent after header normalization.
    ///
    /// Carries the missing names so callers can report them verbatim.
    #[error("missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A cell that must be numeric could not be parsed.
    #[error("non-numeric {column} value '{value}' in row {row}")]
    MalformedNumber {
        column: String,
        row: usize,
        value: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
