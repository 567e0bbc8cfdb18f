//! Pricing table configuration files.
//!
//! Operators can override the built-in vendor table with a CSV of the shape:
//!
//! ```csv
//! prefix,shipping price,profit
//! THPE,5.95,2
//! DICE,0,2
//! ```
//!
//! Header matching is case- and whitespace-insensitive; prefix values are
//! taken verbatim.

use std::path::Path;

use csv::ReaderBuilder;

use repricer_model::{PricingEntry, PricingTable};

use crate::error::{IngestError, Result};
use crate::polars_utils::parse_f64;
use crate::table::strip_bom;

const PREFIX: &str = "prefix";
const SHIPPING_PRICE: &str = "shipping price";
const PROFIT: &str = "profit";

/// Load a [`PricingTable`] from a CSV configuration file.
///
/// Rows with an empty prefix are skipped; non-numeric shipping or profit
/// values fail the load with the offending value in the error.
pub fn load_pricing_table(path: &Path) -> Result<PricingTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?
        .iter()
        .map(|header| strip_bom(header).trim().to_lowercase())
        .collect();

    let position = |name: &str| -> Result<usize> {
        headers.iter().position(|header| header == name).ok_or_else(|| {
            IngestError::MissingColumn {
                column: name.to_string(),
                path: path.to_path_buf(),
            }
        })
    };
    let prefix_idx = position(PREFIX)?;
    let shipping_idx = position(SHIPPING_PRICE)?;
    let profit_idx = position(PROFIT)?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        let prefix = record.get(prefix_idx).unwrap_or("").trim();
        if prefix.is_empty() {
            continue;
        }
        let shipping_raw = record.get(shipping_idx).unwrap_or("");
        let shipping_price = parse_f64(shipping_raw).ok_or_else(|| IngestError::InvalidValue {
            field: SHIPPING_PRICE.to_string(),
            value: shipping_raw.to_string(),
            path: path.to_path_buf(),
        })?;
        let profit_raw = record.get(profit_idx).unwrap_or("");
        let profit = parse_f64(profit_raw).ok_or_else(|| IngestError::InvalidValue {
            field: PROFIT.to_string(),
            value: profit_raw.to_string(),
            path: path.to_path_buf(),
        })?;
        entries.push(PricingEntry::new(prefix, shipping_price, profit));
    }

    Ok(PricingTable::from_entries(entries))
}
