//! The repricing computation.
//!
//! For every row:
//!
//! ```text
//! selling price = round2((vendor price + shipping + profit) / 0.85)
//! quantity      = 2 if vendor price > 5 and vendor qty > 5 else 0
//! ```
//!
//! where `(shipping, profit)` comes from the injected [`PricingTable`] keyed
//! on the literal `vendor prefix` cell. Both derived columns are computed for
//! the whole table before either is attached, so a malformed cell fails the
//! request without producing partial output.

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};
use tracing::debug;

use repricer_ingest::{any_to_f64, any_to_string};
use repricer_model::{
    MARKUP_DIVISOR, PricingTable, QUANTITY, SELLING_PRICE, VENDOR_PREFIX, VENDOR_PRICE, VENDOR_QTY,
};

use crate::error::{Result, TransformError};

/// Attach `selling price` and `quantity` columns to a validated feed frame.
///
/// Re-running on an already-repriced frame replaces both columns in place;
/// values recompute identically rather than accumulating.
pub fn apply_repricing(df: &mut DataFrame, pricing: &PricingTable) -> Result<()> {
    let height = df.height();
    let prefix_col = df.column(VENDOR_PREFIX)?.clone();
    let price_col = df.column(VENDOR_PRICE)?.clone();
    let qty_col = df.column(VENDOR_QTY)?.clone();

    let mut selling_prices: Vec<f64> = Vec::with_capacity(height);
    let mut quantities: Vec<i64> = Vec::with_capacity(height);
    for idx in 0..height {
        let prefix = any_to_string(prefix_col.get(idx).unwrap_or(AnyValue::Null));
        let vendor_price = numeric_cell(&price_col, VENDOR_PRICE, idx)?;
        let vendor_qty = numeric_cell(&qty_col, VENDOR_QTY, idx)?;

        let (shipping, profit) = pricing.lookup(&prefix);
        selling_prices.push(round2((vendor_price + shipping + profit) / MARKUP_DIVISOR));
        quantities.push(if vendor_price > 5.0 && vendor_qty > 5.0 {
            2
        } else {
            0
        });
    }

    df.with_column(Series::new(SELLING_PRICE.into(), selling_prices))?;
    df.with_column(Series::new(QUANTITY.into(), quantities))?;
    debug!(rows = height, "feed repriced");
    Ok(())
}

fn numeric_cell(
    column: &polars::prelude::Column,
    name: &str,
    idx: usize,
) -> Result<f64> {
    let value = column.get(idx).unwrap_or(AnyValue::Null);
    any_to_f64(value.clone()).ok_or_else(|| TransformError::MalformedNumber {
        column: name.to_string(),
        row: idx,
        value: any_to_string(value),
    })
}

/// Round half-away-from-zero to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(21.117_647), 21.12);
        assert_eq!(round2(9.411_764), 9.41);
        assert_eq!(round2(5.882_352), 5.88);
        assert_eq!(round2(1.996), 2.0);
        assert_eq!(round2(10.0), 10.0);
    }
}
