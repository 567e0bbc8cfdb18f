pub mod error;
pub mod normalize;
pub mod reprice;

pub use error::{Result, TransformError};
pub use normalize::{normalize_headers, validate_required};
pub use reprice::apply_repricing;
