use std::path::PathBuf;
use std::sync::Arc;

use repricer_model::PricingTable;

/// Shared server state.
///
/// The pricing table is read-only for the life of the process; requests share
/// nothing mutable, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub pricing: Arc<PricingTable>,
    pub upload_dir: PathBuf,
    pub processed_dir: PathBuf,
}

impl AppState {
    pub fn new(pricing: PricingTable, upload_dir: PathBuf, processed_dir: PathBuf) -> Self {
        Self {
            pricing: Arc::new(pricing),
            upload_dir,
            processed_dir,
        }
    }
}
