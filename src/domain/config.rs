// ============================================================================
// Search Configuration
// ============================================================================

use super::limit::SearchLimit;
use crate::error::{SearchError, SearchResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Path prefix used when confirming a result, e.g. `/stocks/AAPL`.
pub const DEFAULT_NAVIGATION_PREFIX: &str = "/stocks/";

/// Location of the catalog asset relative to the served root.
pub const DEFAULT_CATALOG_ASSET: &str = "data/stocks.json";

/// Configuration for a typeahead search box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Result limit used when the caller does not pass one
    pub default_limit: SearchLimit,

    /// Prefix prepended to a symbol to build the navigation target
    pub navigation_prefix: String,

    /// Optional: catalog asset to load at session start
    /// None means the caller installs the catalog itself
    pub catalog_path: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: SearchLimit::DEFAULT,
            navigation_prefix: DEFAULT_NAVIGATION_PREFIX.to_string(),
            catalog_path: None,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the default result limit
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = SearchLimit::new(limit);
        self
    }

    /// Builder method: Set the navigation prefix
    pub fn with_navigation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.navigation_prefix = prefix.into();
        self
    }

    /// Builder method: Set the catalog asset path
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Navigation target for a confirmed symbol
    pub fn navigation_path(&self, symbol: &str) -> String {
        format!("{}{}", self.navigation_prefix, symbol)
    }

    pub fn validate(&self) -> SearchResult<()> {
        if self.navigation_prefix.is_empty() {
            return Err(SearchError::InvalidConfig(
                "Navigation prefix cannot be empty".to_string(),
            ));
        }

        if !self.navigation_prefix.starts_with('/') {
            return Err(SearchError::InvalidConfig(
                "Navigation prefix must start with '/'".to_string(),
            ));
        }

        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                return Err(SearchError::InvalidConfig(
                    "Catalog path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
