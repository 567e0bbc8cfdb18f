//! Canonical column names for vendor feed tables.
//!
//! All names are the normalized (trimmed, lowercased) form; header
//! normalization happens before any of these are matched against a table.

/// Vendor code identifying the supplier, used as the pricing-table key.
pub const VENDOR_PREFIX: &str = "vendor prefix";

/// Supplier's own article number.
pub const VENDOR_SKU: &str = "vendor sku";

/// Unit cost charged by the supplier.
pub const VENDOR_PRICE: &str = "vendor price";

/// Units the supplier currently has on hand.
pub const VENDOR_QTY: &str = "vendor qty";

/// Derived customer-facing price, rounded to 2 decimals.
pub const SELLING_PRICE: &str = "selling price";

/// Derived order quantity (0 or 2).
pub const QUANTITY: &str = "quantity";

/// Columns every feed must carry before it can be repriced.
pub const REQUIRED_COLUMNS: [&str; 4] = [VENDOR_PREFIX, VENDOR_SKU, VENDOR_PRICE, VENDOR_QTY];
