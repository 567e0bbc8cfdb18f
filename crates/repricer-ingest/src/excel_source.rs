//! Spreadsheet feed parsing via calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::error::{IngestError, Result};
use crate::polars_utils::format_numeric;
use crate::table::{SourceTable, shape_row, strip_bom};

/// Parse the first worksheet of a workbook: first row is the header.
///
/// Numeric cells are stringified without trailing zeros so a quantity column
/// reads "10" rather than "10.0".
pub(crate) fn read_excel_source(path: &Path) -> Result<SourceTable> {
    let mut workbook = open_workbook_auto(path).map_err(|error| IngestError::WorkbookRead {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Err(IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        });
    };
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|error| IngestError::WorkbookRead {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for row in range.rows() {
        let raw: Vec<String> = row.iter().map(cell_to_string).collect();
        if raw.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => headers = Some(raw.iter().map(|cell| strip_bom(cell).to_string()).collect()),
            Some(names) => rows.push(shape_row(&raw, names.len())),
        }
    }

    Ok(SourceTable {
        headers: headers.unwrap_or_default(),
        rows,
    })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(v) => format_numeric(*v),
        Data::Int(v) => v.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
