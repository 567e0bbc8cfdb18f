//! Workbook output writer.

use std::path::Path;

use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::Workbook;

use repricer_ingest::any_to_string;

use crate::error::{OutputError, Result};

/// Write a frame as an XLSX workbook with a single sheet.
///
/// Numeric cells are written as numbers; everything else as strings with the
/// source text intact.
pub fn write_xlsx_output(df: &DataFrame, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let workbook_error = |error: rust_xlsxwriter::XlsxError| OutputError::WorkbookWrite {
        path: path.to_path_buf(),
        message: error.to_string(),
    };

    let names = df.get_column_names_owned();
    for (col, name) in names.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, name.as_str())
            .map_err(workbook_error)?;
    }

    let columns: Vec<_> = names
        .iter()
        .map(|name| df.column(name.as_str()))
        .collect::<std::result::Result<_, _>>()?;
    for idx in 0..df.height() {
        let row = (idx + 1) as u32;
        for (col, column) in columns.iter().enumerate() {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            match cell_number(&value) {
                Some(number) => worksheet
                    .write_number(row, col as u16, number)
                    .map_err(workbook_error)?,
                None => worksheet
                    .write_string(row, col as u16, any_to_string(value))
                    .map_err(workbook_error)?,
            };
        }
    }

    workbook.save(path).map_err(workbook_error)?;
    Ok(())
}

/// Numeric value for cells that are actually numeric in the frame.
///
/// String cells that happen to look numeric stay strings so the original
/// columns survive verbatim.
fn cell_number(value: &AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Int8(v) => Some(f64::from(*v)),
        AnyValue::Int16(v) => Some(f64::from(*v)),
        AnyValue::Int32(v) => Some(f64::from(*v)),
        AnyValue::Int64(v) => Some(*v as f64),
        AnyValue::UInt8(v) => Some(f64::from(*v)),
        AnyValue::UInt16(v) => Some(f64::from(*v)),
        AnyValue::UInt32(v) => Some(f64::from(*v)),
        AnyValue::UInt64(v) => Some(*v as f64),
        AnyValue::Float32(v) => Some(f64::from(*v)),
        AnyValue::Float64(v) => Some(*v),
        _ => None,
    }
}
