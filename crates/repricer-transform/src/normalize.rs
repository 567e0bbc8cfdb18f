//! Header normalization and required-column validation.
//!
//! Vendor exports are inconsistent about header casing and padding, so every
//! header is trimmed and lowercased before the table reaches the repricer.
//! Cell values are never touched here.

use tracing::debug;

use repricer_ingest::SourceTable;
use repricer_model::REQUIRED_COLUMNS;

use crate::error::{Result, TransformError};

/// Trim and lowercase every header. Cell values pass through untouched.
pub fn normalize_headers(mut table: SourceTable) -> SourceTable {
    for header in &mut table.headers {
        *header = header.trim().to_lowercase();
    }
    table
}

/// Check that every required column is present.
///
/// Expects normalized headers. On failure the error carries the missing
/// names in their canonical order.
pub fn validate_required(table: &SourceTable) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| table.column_index(name).is_none())
        .map(|name| (*name).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        debug!(missing = ?missing, "feed failed column validation");
        Err(TransformError::MissingColumns { columns: missing })
    }
}
