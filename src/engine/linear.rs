// ============================================================================
// Linear Scan Matcher
// Unseeded scan with the same contract as PrefixMatcher
// ============================================================================

use super::passes::MatchCollector;
use crate::domain::{SearchLimit, StockCatalog};
use crate::interfaces::{MatchOutcome, StockMatcher};

/// Scans every entry for the symbol pass instead of seeding it with a
/// binary search. Produces the same results as the prefix matcher on a
/// sorted catalog; used as a baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScanMatcher;

impl StockMatcher for LinearScanMatcher {
    fn search_detailed(&self, catalog: &StockCatalog, query: &str, limit: SearchLimit) -> MatchOutcome {
        let mut collector = MatchCollector::new(query, limit);
        collector.symbol_pass(catalog.entries(), false);
        collector.run_name_pass(catalog)
    }

    fn name(&self) -> &str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StockEntry;
    use crate::engine::PrefixMatcher;

    #[test]
    fn test_agrees_with_prefix_matcher() {
        let catalog = StockCatalog::new(vec![
            StockEntry::new("AA", "Alcoa"),
            StockEntry::new("AAPL", "Apple Inc"),
            StockEntry::new("ABT", "Abbott Labs"),
            StockEntry::new("MSFT", "Microsoft Corp"),
            StockEntry::new("T", "AT&T Inc"),
        ]);

        for query in ["A", "AA", "ab", "AT", "mic", "t", "zzz"] {
            for limit in 0..6 {
                let limit = SearchLimit::new(limit);
                assert_eq!(
                    LinearScanMatcher.search(&catalog, query, limit),
                    PrefixMatcher.search(&catalog, query, limit),
                    "query {query:?} limit {limit}"
                );
            }
        }
    }
}
