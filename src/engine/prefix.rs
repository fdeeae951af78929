// ============================================================================
// Prefix Matcher
// Binary-search seeded symbol pass followed by a company-name pass
// ============================================================================

use super::passes::MatchCollector;
use crate::domain::{SearchLimit, StockCatalog, StockEntry};
use crate::interfaces::{MatchOutcome, MatchSet, StockMatcher};
use std::sync::Arc;

/// First index at or after which a symbol starting with `query` can occur.
///
/// `entries` must be sorted ascending by symbol. Returns `entries.len()` when
/// every symbol sorts before `query`.
pub fn find_start_index(entries: &[Arc<StockEntry>], query: &str) -> usize {
    // half-open [left, right)
    let mut left = 0;
    let mut right = entries.len();

    while left < right {
        let mid = left + (right - left) / 2;
        let symbol = entries[mid].symbol();

        if symbol.starts_with(query) {
            // keep looking left for an earlier match
            right = mid;
        } else if symbol < query {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    left
}

/// Default typeahead matcher.
///
/// Positions the symbol pass with [`find_start_index`] in O(log n), collects
/// the contiguous run of symbol-prefix matches, then fills remaining slots
/// from company names in catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixMatcher;

impl StockMatcher for PrefixMatcher {
    fn search_detailed(&self, catalog: &StockCatalog, query: &str, limit: SearchLimit) -> MatchOutcome {
        if limit.is_zero() {
            return MatchOutcome::default();
        }
        let mut collector = MatchCollector::new(query, limit);

        let entries = catalog.entries();
        let start = find_start_index(entries, collector.upper_query());
        collector.symbol_pass(&entries[start..], true);

        collector.run_name_pass(catalog)
    }

    fn name(&self) -> &str {
        "prefix"
    }
}

/// Search `catalog` with the default [`PrefixMatcher`]
pub fn search(catalog: &StockCatalog, query: &str, limit: SearchLimit) -> MatchSet {
    PrefixMatcher.search(catalog, query, limit)
}
