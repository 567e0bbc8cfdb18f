//! Delimited output writer.

use std::path::Path;

use polars::prelude::{AnyValue, DataFrame};

use repricer_ingest::any_to_string;

use crate::error::{OutputError, Result};

/// Write a frame as CSV: header row plus one record per data row.
pub fn write_csv_output(df: &DataFrame, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|error| OutputError::CsvWrite {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;

    let names = df.get_column_names_owned();
    writer
        .write_record(names.iter().map(|name| name.as_str()))
        .map_err(|error| OutputError::CsvWrite {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let columns: Vec<_> = names
        .iter()
        .map(|name| df.column(name.as_str()))
        .collect::<std::result::Result<_, _>>()?;
    for idx in 0..df.height() {
        let record: Vec<String> = columns
            .iter()
            .map(|column| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        writer
            .write_record(&record)
            .map_err(|error| OutputError::CsvWrite {
                path: path.to_path_buf(),
                message: error.to_string(),
            })?;
    }

    writer.flush().map_err(|error| OutputError::CsvWrite {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    Ok(())
}
