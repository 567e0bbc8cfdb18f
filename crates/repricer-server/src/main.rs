use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repricer_ingest::load_pricing_table;
use repricer_model::PricingTable;
use repricer_server::{AppState, app, bootstrap_dirs};

#[derive(Parser)]
#[command(
    name = "repricer-server",
    version,
    about = "HTTP server: upload a vendor feed, download the repriced workbook"
)]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Directory for uploaded feed files.
    #[arg(long, value_name = "DIR", default_value = "uploads")]
    upload_dir: PathBuf,

    /// Directory for processed output files.
    #[arg(long, value_name = "DIR", default_value = "processed")]
    processed_dir: PathBuf,

    /// Pricing table CSV (prefix, shipping price, profit). Default: built-in table.
    #[arg(long, value_name = "CSV")]
    pricing: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repricer_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    bootstrap_dirs(&args.upload_dir, &args.processed_dir).context("create working directories")?;

    let pricing = match &args.pricing {
        Some(path) => load_pricing_table(path)
            .with_context(|| format!("load pricing table {}", path.display()))?,
        None => PricingTable::builtin(),
    };
    tracing::info!(prefixes = pricing.len(), "pricing table loaded");

    let state = AppState::new(pricing, args.upload_dir, args.processed_dir);
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    axum::serve(listener, app(state))
        .await
        .context("serve repricer")?;
    Ok(())
}
