//! Repriced feed output.
//!
//! Writes an augmented feed frame back to disk in the same general family as
//! the input: CSV for delimited use, XLSX for spreadsheet consumers. Numeric
//! cells keep their numeric type in XLSX and print without trailing zeros in
//! CSV.

mod csv_out;
mod xlsx_out;

pub mod error;

pub use csv_out::write_csv_output;
pub use error::{OutputError, Result};
pub use xlsx_out::write_xlsx_output;

use std::path::Path;

use polars::prelude::DataFrame;

/// Write a frame to `path`, dispatching on the extension.
pub fn write_table(df: &DataFrame, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "csv" => write_csv_output(df, path),
        "xlsx" => write_xlsx_output(df, path),
        _ => Err(OutputError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
