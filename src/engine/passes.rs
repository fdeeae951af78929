// ============================================================================
// Match Passes
// Symbol-prefix and company-name passes shared by the matchers
// ============================================================================

use crate::domain::{SearchLimit, StockCatalog, StockEntry};
use crate::interfaces::{MatchOutcome, MatchSet};
use std::collections::HashSet;
use std::sync::Arc;

/// Accumulates results for one search, enforcing the limit and symbol
/// uniqueness across both passes.
pub(crate) struct MatchCollector<'a> {
    upper_query: String,
    limit: usize,
    matches: MatchSet,
    seen: HashSet<&'a str>,
}

impl<'a> MatchCollector<'a> {
    pub(crate) fn new(query: &str, limit: SearchLimit) -> Self {
        Self {
            upper_query: query.to_uppercase(),
            limit: limit.get(),
            matches: MatchSet::new(),
            seen: HashSet::new(),
        }
    }

    pub(crate) fn upper_query(&self) -> &str {
        &self.upper_query
    }

    pub(crate) fn is_full(&self) -> bool {
        self.matches.len() >= self.limit
    }

    fn push(&mut self, entry: &'a Arc<StockEntry>) {
        if self.seen.insert(entry.symbol()) {
            self.matches.push(Arc::clone(entry));
        }
    }

    /// Symbol-prefix pass over `candidates`, which must be in symbol order.
    ///
    /// Stops at the first candidate past the contiguous run of prefix
    /// matches.
    pub(crate) fn symbol_pass<I>(&mut self, candidates: I, contiguous: bool)
    where
        I: IntoIterator<Item = &'a Arc<StockEntry>>,
    {
        for entry in candidates {
            if self.is_full() {
                break;
            }
            if entry.symbol().starts_with(self.upper_query.as_str()) {
                self.push(entry);
            } else if contiguous {
                break;
            }
        }
    }

    /// Company-name pass over the whole catalog in catalog order; runs only
    /// while slots remain.
    pub(crate) fn name_pass(&mut self, catalog: &'a StockCatalog) {
        for entry in catalog {
            if self.is_full() {
                break;
            }
            if entry.company_name_upper().starts_with(self.upper_query.as_str()) {
                self.push(entry);
            }
        }
    }

    pub(crate) fn run_name_pass(mut self, catalog: &'a StockCatalog) -> MatchOutcome {
        let prefix_hits = self.matches.len();
        if !self.is_full() {
            self.name_pass(catalog);
        }
        MatchOutcome::new(self.matches, prefix_hits)
    }
}
