//! CLI argument definitions for the repricer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "repricer",
    version,
    about = "Repricer - derive selling prices and order quantities for vendor feeds",
    long_about = "Reprice vendor product feeds.\n\n\
                  Reads a CSV or XLSX feed, validates the vendor columns, computes\n\
                  'selling price' and 'quantity' from the per-vendor pricing table,\n\
                  and writes the augmented feed back out."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reprice a feed file and write the augmented table.
    Process(ProcessArgs),

    /// List the active pricing table.
    Prefixes(PrefixesArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the vendor feed (.csv or .xlsx).
    #[arg(value_name = "FEED_FILE")]
    pub input: PathBuf,

    /// Output path (default: <FEED_FILE stem>_repriced.<ext>).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format when no --output path is given.
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Pricing table CSV (prefix, shipping price, profit). Default: built-in table.
    #[arg(long = "pricing", value_name = "CSV")]
    pub pricing: Option<PathBuf>,
}

#[derive(Parser)]
pub struct PrefixesArgs {
    /// Pricing table CSV (prefix, shipping price, profit). Default: built-in table.
    #[arg(long = "pricing", value_name = "CSV")]
    pub pricing: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Xlsx,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
