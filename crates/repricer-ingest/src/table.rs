//! Raw feed tables and DataFrame construction.
//!
//! A [`SourceTable`] is the faithful parse of one input file: headers plus
//! string cells, row order preserved, cell values untouched. Everything the
//! pipeline does downstream (normalization, validation, repricing) operates
//! on this representation or the DataFrame built from it.

use std::path::Path;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::debug;

use crate::csv_source::read_csv_source;
use crate::error::{IngestError, Result};
use crate::excel_source::read_excel_source;

/// One parsed feed file: headers plus verbatim string rows.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    /// Position of a header by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Build a string-typed DataFrame, one column per header.
    ///
    /// Rows shorter than the header count are padded with empty strings;
    /// cells beyond the header count are dropped.
    pub fn to_data_frame(&self) -> Result<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.headers.len());
        for (idx, header) in self.headers.iter().enumerate() {
            let mut values: Vec<String> = Vec::with_capacity(self.rows.len());
            for row in &self.rows {
                values.push(row.get(idx).cloned().unwrap_or_default());
            }
            columns.push(Series::new(header.as_str().into(), values).into());
        }
        let df = DataFrame::new(columns)?;
        Ok(df)
    }
}

/// Read a feed file into a [`SourceTable`], dispatching on extension.
///
/// `.csv` is parsed as a delimited file; `.xlsx`, `.xlsm`, and `.xls` as
/// spreadsheet workbooks (first sheet). Anything else is
/// [`IngestError::UnsupportedFormat`].
pub fn read_source_table(path: &Path) -> Result<SourceTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let table = match extension.as_str() {
        "csv" => read_csv_source(path)?,
        "xlsx" | "xlsm" | "xls" => read_excel_source(path)?,
        _ => {
            return Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "feed file read"
    );
    Ok(table)
}

/// Strip a UTF-8 byte-order mark from a header cell.
pub(crate) fn strip_bom(raw: &str) -> &str {
    raw.trim_matches('\u{feff}')
}

/// Pad or truncate a raw row to the header width.
pub(crate) fn shape_row(raw: &[String], width: usize) -> Vec<String> {
    let mut row = Vec::with_capacity(width);
    for idx in 0..width {
        row.push(raw.get(idx).cloned().unwrap_or_default());
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_row_pads_and_truncates() {
        let raw = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(shape_row(&raw, 2), vec!["a", "b"]);
        assert_eq!(shape_row(&raw, 4), vec!["a", "b", "c", ""]);
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}vendor prefix"), "vendor prefix");
        assert_eq!(strip_bom("vendor prefix"), "vendor prefix");
    }

    #[test]
    fn test_to_data_frame_shape() {
        let table = SourceTable {
            headers: vec!["a".to_string(), "b".to_string()],
            rows: vec![
                vec!["1".to_string(), "x".to_string()],
                vec!["2".to_string(), "y".to_string()],
            ],
        };
        let df = table.to_data_frame().unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_to_data_frame_empty_table() {
        let table = SourceTable::default();
        let df = table.to_data_frame().unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 0);
    }
}
