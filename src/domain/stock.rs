// ============================================================================
// Stock Domain Model
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Wire Record
// ============================================================================

/// One record of the static catalog asset.
///
/// The asset may also carry a `company_name_upper` key; it is ignored and
/// recomputed when the record becomes a [`StockEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub symbol: String,
    pub company_name: String,
}

impl StockRecord {
    pub fn new(symbol: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            company_name: company_name.into(),
        }
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

/// A tradable stock as held by the catalog.
///
/// `company_name_upper` is derived from `company_name` at construction and
/// cannot be set on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StockEntry {
    symbol: String,
    company_name: String,
    company_name_upper: String,
}

impl StockEntry {
    pub fn new(symbol: impl Into<String>, company_name: impl Into<String>) -> Self {
        let company_name = company_name.into();
        let company_name_upper = company_name.to_uppercase();
        Self {
            symbol: symbol.into(),
            company_name,
            company_name_upper,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn company_name_upper(&self) -> &str {
        &self.company_name_upper
    }
}

impl From<StockRecord> for StockEntry {
    fn from(record: StockRecord) -> Self {
        Self::new(record.symbol, record.company_name)
    }
}

impl From<&StockEntry> for StockRecord {
    fn from(entry: &StockEntry) -> Self {
        Self::new(entry.symbol.clone(), entry.company_name.clone())
    }
}

impl fmt::Display for StockEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.company_name)
    }
}
