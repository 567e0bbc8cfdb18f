//! Integration tests for pricing configuration loading.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use repricer_ingest::{IngestError, load_pricing_table};

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("pricing.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_builtin_shaped_table() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "prefix,shipping price,profit\nTHPE,5.95,2\nDICE,0,2\nTPSS,7.95,2\nNABR,10,2\nFRNE,8.95,2\nSEWR,9,2\n",
    );

    let table = load_pricing_table(&path).unwrap();
    assert_eq!(table.len(), 6);
    assert_eq!(table.lookup("THPE"), (5.95, 2.0));
    assert_eq!(table.lookup("ZZZZ"), (0.0, 2.0));
}

#[test]
fn header_matching_is_case_and_whitespace_insensitive() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, " Prefix , Shipping Price , PROFIT \nACME,4.5,3\n");

    let table = load_pricing_table(&path).unwrap();
    assert_eq!(table.lookup("ACME"), (4.5, 3.0));
}

#[test]
fn profit_can_differ_per_vendor() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "prefix,shipping price,profit\nACME,1,5\nBOLT,2,0.5\n");

    let table = load_pricing_table(&path).unwrap();
    assert_eq!(table.lookup("ACME"), (1.0, 5.0));
    assert_eq!(table.lookup("BOLT"), (2.0, 0.5));
    // Misses still use the built-in default profit, not any configured value.
    assert_eq!(table.lookup("OTHER"), (0.0, 2.0));
}

#[test]
fn missing_column_is_reported_by_name() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "prefix,shipping price\nACME,1\n");

    let error = load_pricing_table(&path).unwrap_err();
    match error {
        IngestError::MissingColumn { column, .. } => assert_eq!(column, "profit"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_shipping_price_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "prefix,shipping price,profit\nACME,cheap,2\n");

    let error = load_pricing_table(&path).unwrap_err();
    match error {
        IngestError::InvalidValue { field, value, .. } => {
            assert_eq!(field, "shipping price");
            assert_eq!(value, "cheap");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rows_without_prefix_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "prefix,shipping price,profit\n,1,2\nACME,3,2\n");

    let table = load_pricing_table(&path).unwrap();
    assert_eq!(table.len(), 1);
}
