//! Integration tests for the repricing computation.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use repricer_ingest::{SourceTable, any_to_f64, any_to_i64, any_to_string};
use repricer_model::PricingTable;
use repricer_transform::{TransformError, apply_repricing, normalize_headers, validate_required};

fn feed_df(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| {
            Series::new(
                name.into(),
                values.iter().copied().map(String::from).collect::<Vec<_>>(),
            )
            .into_column()
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

fn full_feed(prefixes: Vec<&str>, prices: Vec<&str>, qtys: Vec<&str>) -> DataFrame {
    let skus: Vec<&str> = (0..prefixes.len()).map(|_| "SKU").collect();
    feed_df(vec![
        ("vendor prefix", prefixes),
        ("vendor sku", skus),
        ("vendor price", prices),
        ("vendor qty", qtys),
    ])
}

fn selling_price_at(df: &DataFrame, idx: usize) -> f64 {
    let column = df.column("selling price").unwrap();
    any_to_f64(column.get(idx).unwrap()).unwrap()
}

fn quantity_at(df: &DataFrame, idx: usize) -> i64 {
    let column = df.column("quantity").unwrap();
    any_to_i64(column.get(idx).unwrap()).unwrap()
}

#[test]
fn known_prefix_uses_configured_shipping_and_profit() {
    // THPE: shipping 5.95, profit 2 -> (10 + 5.95 + 2) / 0.85 = 21.12
    let mut df = full_feed(vec!["THPE"], vec!["10"], vec!["7"]);
    apply_repricing(&mut df, &PricingTable::builtin()).unwrap();
    assert!((selling_price_at(&df, 0) - 21.12).abs() < 1e-9);
    assert_eq!(quantity_at(&df, 0), 2);
}

#[test]
fn strict_thresholds_gate_the_quantity() {
    // DICE: shipping 0, profit 2 -> (6 + 0 + 2) / 0.85 = 9.41; 6 > 5 twice
    let mut df = full_feed(vec!["DICE"], vec!["6"], vec!["6"]);
    apply_repricing(&mut df, &PricingTable::builtin()).unwrap();
    assert!((selling_price_at(&df, 0) - 9.41).abs() < 1e-9);
    assert_eq!(quantity_at(&df, 0), 2);
}

#[test]
fn unknown_prefix_falls_back_to_defaults() {
    // ZZZZ: defaults (0, 2) -> (3 + 0 + 2) / 0.85 = 5.88; price 3 is not > 5
    let mut df = full_feed(vec!["ZZZZ"], vec!["3"], vec!["10"]);
    apply_repricing(&mut df, &PricingTable::builtin()).unwrap();
    assert!((selling_price_at(&df, 0) - 5.88).abs() < 1e-9);
    assert_eq!(quantity_at(&df, 0), 0);
}

#[test]
fn threshold_comparisons_are_strict() {
    let mut df = full_feed(
        vec!["DICE", "DICE", "DICE"],
        vec!["5", "6", "5.01"],
        vec!["10", "5", "5.01"],
    );
    apply_repricing(&mut df, &PricingTable::builtin()).unwrap();
    assert_eq!(quantity_at(&df, 0), 0); // price exactly 5
    assert_eq!(quantity_at(&df, 1), 0); // qty exactly 5
    assert_eq!(quantity_at(&df, 2), 2); // both just above
}

#[test]
fn row_count_and_order_are_preserved() {
    let mut df = full_feed(
        vec!["THPE", "DICE", "ZZZZ"],
        vec!["10", "6", "3"],
        vec!["7", "6", "10"],
    );
    apply_repricing(&mut df, &PricingTable::builtin()).unwrap();
    assert_eq!(df.height(), 3);
    let prefixes = df.column("vendor prefix").unwrap();
    assert_eq!(any_to_string(prefixes.get(0).unwrap()), "THPE");
    assert_eq!(any_to_string(prefixes.get(2).unwrap()), "ZZZZ");
    assert!((selling_price_at(&df, 0) - 21.12).abs() < 1e-9);
    assert!((selling_price_at(&df, 1) - 9.41).abs() < 1e-9);
    assert!((selling_price_at(&df, 2) - 5.88).abs() < 1e-9);
}

#[test]
fn extra_columns_pass_through_unchanged() {
    let mut df = feed_df(vec![
        ("vendor prefix", vec!["THPE"]),
        ("vendor sku", vec!["A-1"]),
        ("vendor price", vec!["10"]),
        ("vendor qty", vec!["7"]),
        ("warehouse", vec!["EAST"]),
    ]);
    apply_repricing(&mut df, &PricingTable::builtin()).unwrap();
    assert_eq!(df.width(), 7);
    let warehouse = df.column("warehouse").unwrap();
    assert_eq!(any_to_string(warehouse.get(0).unwrap()), "EAST");
}

#[test]
fn repricing_twice_replaces_rather_than_appends() {
    let mut df = full_feed(vec!["THPE"], vec!["10"], vec!["7"]);
    let pricing = PricingTable::builtin();
    apply_repricing(&mut df, &pricing).unwrap();
    let width_after_first = df.width();
    apply_repricing(&mut df, &pricing).unwrap();
    assert_eq!(df.width(), width_after_first);
    assert!((selling_price_at(&df, 0) - 21.12).abs() < 1e-9);
}

#[test]
fn non_numeric_price_fails_without_partial_output() {
    let mut df = full_feed(vec!["THPE", "DICE"], vec!["10", "call us"], vec!["7", "6"]);
    let width_before = df.width();
    let error = apply_repricing(&mut df, &PricingTable::builtin()).unwrap_err();
    match error {
        TransformError::MalformedNumber { column, row, value } => {
            assert_eq!(column, "vendor price");
            assert_eq!(row, 1);
            assert_eq!(value, "call us");
        }
        other => panic!("unexpected error: {other}"),
    }
    // Neither derived column was attached.
    assert_eq!(df.width(), width_before);
}

#[test]
fn empty_qty_cell_is_malformed() {
    let mut df = full_feed(vec!["THPE"], vec!["10"], vec![""]);
    let error = apply_repricing(&mut df, &PricingTable::builtin()).unwrap_err();
    assert!(matches!(
        error,
        TransformError::MalformedNumber { .. }
    ));
}

#[test]
fn empty_table_reprices_to_empty_output() {
    let mut df = full_feed(vec![], vec![], vec![]);
    apply_repricing(&mut df, &PricingTable::builtin()).unwrap();
    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 6);
}

#[test]
fn pipeline_is_idempotent_over_normalize_and_reprice() {
    let raw = SourceTable {
        headers: vec![
            " Vendor Prefix ".to_string(),
            "Vendor SKU".to_string(),
            "Vendor Price".to_string(),
            "Vendor Qty".to_string(),
        ],
        rows: vec![vec![
            "DICE".to_string(),
            "D-9".to_string(),
            "6".to_string(),
            "6".to_string(),
        ]],
    };
    let normalized = normalize_headers(raw);
    validate_required(&normalized).unwrap();
    let mut df = normalized.to_data_frame().unwrap();
    let pricing = PricingTable::builtin();
    apply_repricing(&mut df, &pricing).unwrap();
    let first_price = selling_price_at(&df, 0);
    apply_repricing(&mut df, &pricing).unwrap();
    assert_eq!(selling_price_at(&df, 0), first_price);
    assert_eq!(quantity_at(&df, 0), 2);
}

#[test]
fn prefix_lookup_is_literal() {
    // A padded prefix cell is an unknown key and prices with the defaults.
    let mut df = full_feed(vec![" THPE"], vec!["10"], vec!["7"]);
    apply_repricing(&mut df, &PricingTable::builtin()).unwrap();
    // (10 + 0 + 2) / 0.85 = 14.12
    assert!((selling_price_at(&df, 0) - 14.12).abs() < 1e-9);
}
