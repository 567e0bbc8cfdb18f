//! Repricer HTTP server library.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod state;
pub mod upload;

pub use state::AppState;
pub use upload::{PROCESSED_FILENAME, bootstrap_dirs, sanitize_filename};

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(upload::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
