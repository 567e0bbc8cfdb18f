use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;

use repricer_ingest::{format_numeric, load_pricing_table};
use repricer_model::{DEFAULT_PROFIT, DEFAULT_SHIPPING_PRICE, PricingTable};

use crate::cli::{OutputFormatArg, PrefixesArgs, ProcessArgs};
use crate::pipeline::process_feed;
use crate::summary::apply_table_style;
use crate::types::ProcessResult;

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let pricing = resolve_pricing(args.pricing.as_deref())?;
    let output = match &args.output {
        Some(path) => path.clone(),
        None => default_output_path(&args.input, args.format),
    };
    let outcome = process_feed(&args.input, &output, &pricing)?;
    Ok(ProcessResult {
        input_path: args.input.clone(),
        output_path: outcome.output_path,
        rows: outcome.rows,
        columns: outcome.columns,
        duration_ms: outcome.duration_ms,
    })
}

pub fn run_prefixes(args: &PrefixesArgs) -> Result<()> {
    let pricing = resolve_pricing(args.pricing.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Prefix", "Shipping price", "Profit"]);
    apply_table_style(&mut table);
    for entry in pricing.entries() {
        table.add_row(vec![
            entry.prefix.clone(),
            format_numeric(entry.shipping_price),
            format_numeric(entry.profit),
        ]);
    }
    table.add_row(vec![
        "(other)".to_string(),
        format_numeric(DEFAULT_SHIPPING_PRICE),
        format_numeric(DEFAULT_PROFIT),
    ]);
    println!("{table}");
    Ok(())
}

fn resolve_pricing(path: Option<&std::path::Path>) -> Result<PricingTable> {
    match path {
        Some(path) => load_pricing_table(path)
            .with_context(|| format!("load pricing table {}", path.display())),
        None => Ok(PricingTable::builtin()),
    }
}

/// `<input stem>_repriced.<ext>` next to the input; `--format` picks the
/// extension, otherwise the input's own is kept (csv when it has none).
fn default_output_path(input: &std::path::Path, format: Option<OutputFormatArg>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("feed");
    let extension = match format {
        Some(OutputFormatArg::Csv) => "csv".to_string(),
        Some(OutputFormatArg::Xlsx) => "xlsx".to_string(),
        None => input
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| "csv".to_string()),
    };
    input.with_file_name(format!("{stem}_repriced.{extension}"))
}
