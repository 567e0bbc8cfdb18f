//! Feed processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the feed file into a raw table
//! 2. **Normalize**: Trim and lowercase headers, check required columns
//! 3. **Reprice**: Compute the selling price and quantity columns
//! 4. **Output**: Write the augmented table
//!
//! Each stage takes the output of the previous stage; a failure at any stage
//! leaves no output file behind.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use repricer_ingest::read_source_table;
use repricer_model::PricingTable;
use repricer_output::write_table;
use repricer_transform::{apply_repricing, normalize_headers, validate_required};

/// Result of a completed pipeline run.
#[derive(Debug)]
pub struct ProcessOutcome {
    /// Rows read from the feed (and written to the output).
    pub rows: usize,
    /// Columns in the augmented table, derived columns included.
    pub columns: usize,
    /// Where the augmented table was written.
    pub output_path: PathBuf,
    /// End-to-end wall time.
    pub duration_ms: u128,
}

/// Run the full pipeline: read, normalize, validate, reprice, write.
pub fn process_feed(
    input: &Path,
    output: &Path,
    pricing: &PricingTable,
) -> Result<ProcessOutcome> {
    let process_span = info_span!("process_feed", input = %input.display());
    let _process_guard = process_span.enter();
    let process_start = Instant::now();

    let table = info_span!("ingest").in_scope(|| {
        let start = Instant::now();
        let table =
            read_source_table(input).with_context(|| format!("read {}", input.display()))?;
        info!(
            rows = table.row_count(),
            columns = table.headers.len(),
            duration_ms = start.elapsed().as_millis(),
            "ingest complete"
        );
        Ok::<_, anyhow::Error>(table)
    })?;

    let df = info_span!("normalize").in_scope(|| {
        let normalized = normalize_headers(table);
        validate_required(&normalized)
            .with_context(|| format!("validate {}", input.display()))?;
        let df = normalized
            .to_data_frame()
            .with_context(|| format!("build frame for {}", input.display()))?;
        Ok::<DataFrame, anyhow::Error>(df)
    })?;

    let df = info_span!("reprice").in_scope(|| {
        let start = Instant::now();
        let mut df = df;
        apply_repricing(&mut df, pricing)
            .with_context(|| format!("reprice {}", input.display()))?;
        info!(
            rows = df.height(),
            duration_ms = start.elapsed().as_millis(),
            "reprice complete"
        );
        Ok::<DataFrame, anyhow::Error>(df)
    })?;

    info_span!("output").in_scope(|| {
        let start = Instant::now();
        write_table(&df, output).with_context(|| format!("write {}", output.display()))?;
        info!(
            output = %output.display(),
            duration_ms = start.elapsed().as_millis(),
            "output complete"
        );
        Ok::<_, anyhow::Error>(())
    })?;

    Ok(ProcessOutcome {
        rows: df.height(),
        columns: df.width(),
        output_path: output.to_path_buf(),
        duration_ms: process_start.elapsed().as_millis(),
    })
}
