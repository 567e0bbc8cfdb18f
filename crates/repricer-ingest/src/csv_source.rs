//! Delimited feed parsing.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::table::{SourceTable, shape_row, strip_bom};

/// Parse a CSV file: first row is the header, cells are kept verbatim.
///
/// Blank lines are skipped; ragged rows are shaped to the header width.
pub(crate) fn read_csv_source(path: &Path) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        let raw: Vec<String> = record.iter().map(|cell| strip_bom(cell).to_string()).collect();
        if raw.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => headers = Some(raw),
            Some(names) => rows.push(shape_row(&raw, names.len())),
        }
    }

    Ok(SourceTable {
        headers: headers.unwrap_or_default(),
        rows,
    })
}
