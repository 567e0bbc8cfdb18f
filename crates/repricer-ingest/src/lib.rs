pub mod error;
pub mod polars_utils;
pub mod pricing_config;
pub mod table;

mod csv_source;
mod excel_source;

pub use error::{IngestError, Result};
pub use polars_utils::{
    any_to_f64, any_to_i64, any_to_string, any_to_string_non_empty, format_numeric, parse_f64,
    parse_i64,
};
pub use pricing_config::load_pricing_table;
pub use table::{SourceTable, read_source_table};
