pub mod columns;
pub mod pricing;

pub use columns::{
    QUANTITY, REQUIRED_COLUMNS, SELLING_PRICE, VENDOR_PREFIX, VENDOR_PRICE, VENDOR_QTY, VENDOR_SKU,
};
pub use pricing::{
    DEFAULT_PROFIT, DEFAULT_SHIPPING_PRICE, MARKUP_DIVISOR, PricingEntry, PricingTable,
};
