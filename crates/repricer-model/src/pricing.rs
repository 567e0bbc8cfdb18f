//! Per-vendor pricing table.
//!
//! A [`PricingTable`] maps a vendor prefix to its shipping price and profit
//! amount. The table is immutable once constructed and is injected into the
//! transformer rather than read from global state, so tests and operators can
//! substitute their own tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Shipping price used when a prefix has no configured entry.
pub const DEFAULT_SHIPPING_PRICE: f64 = 0.0;

/// Profit amount used when a prefix has no configured entry.
pub const DEFAULT_PROFIT: f64 = 2.0;

/// Divisor applied to the cost basis to produce the selling price.
pub const MARKUP_DIVISOR: f64 = 0.85;

/// One vendor's configured shipping price and profit amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingEntry {
    pub prefix: String,
    pub shipping_price: f64,
    pub profit: f64,
}

impl PricingEntry {
    pub fn new(prefix: impl Into<String>, shipping_price: f64, profit: f64) -> Self {
        Self {
            prefix: prefix.into(),
            shipping_price,
            profit,
        }
    }
}

/// Immutable prefix-to-pricing mapping.
///
/// `lookup` is total: any string, including the empty string, resolves to a
/// pair. Lookup uses the literal key; no trimming or case folding is applied.
#[derive(Debug, Clone, Default)]
pub struct PricingTable {
    entries: BTreeMap<String, PricingEntry>,
}

impl PricingTable {
    /// The built-in vendor table.
    pub fn builtin() -> Self {
        Self::from_entries([
            PricingEntry::new("THPE", 5.95, 2.0),
            PricingEntry::new("DICE", 0.0, 2.0),
            PricingEntry::new("TPSS", 7.95, 2.0),
            PricingEntry::new("NABR", 10.0, 2.0),
            PricingEntry::new("FRNE", 8.95, 2.0),
            PricingEntry::new("SEWR", 9.0, 2.0),
        ])
    }

    /// Build a table from explicit entries. Later entries win on duplicate
    /// prefixes.
    pub fn from_entries(entries: impl IntoIterator<Item = PricingEntry>) -> Self {
        let mut map = BTreeMap::new();
        for entry in entries {
            map.insert(entry.prefix.clone(), entry);
        }
        Self { entries: map }
    }

    /// Shipping price and profit for a vendor prefix.
    ///
    /// Unknown prefixes resolve to
    /// ([`DEFAULT_SHIPPING_PRICE`], [`DEFAULT_PROFIT`]).
    pub fn lookup(&self, prefix: &str) -> (f64, f64) {
        match self.entries.get(prefix) {
            Some(entry) => (entry.shipping_price, entry.profit),
            None => (DEFAULT_SHIPPING_PRICE, DEFAULT_PROFIT),
        }
    }

    /// Whether the table has a configured entry for `prefix`.
    pub fn contains(&self, prefix: &str) -> bool {
        self.entries.contains_key(prefix)
    }

    /// Configured entries in prefix order.
    pub fn entries(&self) -> impl Iterator<Item = &PricingEntry> {
        self.entries.values()
    }

    /// Number of configured entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
