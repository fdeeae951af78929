// ============================================================================
// Stock Matcher Interface
// Defines the contract for pluggable typeahead search strategies
// ============================================================================

use crate::domain::{SearchLimit, StockCatalog, StockEntry};
use smallvec::SmallVec;
use std::sync::Arc;

/// Ordered search results, unique by symbol
pub type MatchSet = SmallVec<[Arc<StockEntry>; 8]>;

/// Search results with a per-pass breakdown
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    matches: MatchSet,
    /// Number of leading entries found by the symbol-prefix pass
    prefix_hits: usize,
}

impl MatchOutcome {
    /// `prefix_hits` is capped at the number of matches
    pub fn new(matches: MatchSet, prefix_hits: usize) -> Self {
        let prefix_hits = prefix_hits.min(matches.len());
        Self {
            matches,
            prefix_hits,
        }
    }

    pub fn matches(&self) -> &MatchSet {
        &self.matches
    }

    pub fn into_matches(self) -> MatchSet {
        self.matches
    }

    pub fn prefix_hits(&self) -> usize {
        self.prefix_hits
    }

    /// Number of trailing entries found by the company-name pass
    pub fn name_hits(&self) -> usize {
        self.matches.len().saturating_sub(self.prefix_hits)
    }

    /// Symbol-prefix matches and company-name matches
    pub fn split(&self) -> (&[Arc<StockEntry>], &[Arc<StockEntry>]) {
        self.matches.split_at(self.prefix_hits)
    }
}

/// Strategy pattern interface for typeahead matching
/// Implementations: PrefixMatcher (binary search seeded), LinearScanMatcher
pub trait StockMatcher: Send + Sync {
    /// Search the catalog for entries matching `query`
    ///
    /// # Arguments
    /// * `catalog` - Catalog sorted by symbol
    /// * `query` - Non-empty query text; case is ignored
    /// * `limit` - Maximum number of results
    ///
    /// # Returns
    /// Symbol-prefix matches in symbol order, then company-name matches in
    /// catalog order, without duplicate symbols
    fn search_detailed(&self, catalog: &StockCatalog, query: &str, limit: SearchLimit) -> MatchOutcome;

    /// Same as [`search_detailed`](Self::search_detailed) without the breakdown
    fn search(&self, catalog: &StockCatalog, query: &str, limit: SearchLimit) -> MatchSet {
        self.search_detailed(catalog, query, limit).into_matches()
    }

    /// Get the matcher name for logging
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn entry(symbol: &str) -> Arc<StockEntry> {
        Arc::new(StockEntry::new(symbol, symbol))
    }

    #[test]
    fn test_outcome_breakdown() {
        let outcome = MatchOutcome::new(smallvec![entry("AA"), entry("AAPL"), entry("X")], 2);
        assert_eq!(outcome.prefix_hits(), 2);
        assert_eq!(outcome.name_hits(), 1);

        let (prefix, names) = outcome.split();
        assert_eq!(prefix.len(), 2);
        assert_eq!(names[0].symbol(), "X");
    }

    #[test]
    fn test_outcome_caps_prefix_hits() {
        let outcome = MatchOutcome::new(smallvec![entry("AA")], 4);
        assert_eq!(outcome.prefix_hits(), 1);
        assert_eq!(outcome.name_hits(), 0);

        let empty = MatchOutcome::new(MatchSet::new(), 3);
        assert_eq!(empty.name_hits(), 0);
        assert!(empty.split().0.is_empty());
    }
}
