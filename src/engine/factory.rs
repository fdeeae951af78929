// ============================================================================
// Stock Search Factory
// Creates search façades with proper configuration
// ============================================================================

use crate::domain::{CatalogHandle, SearchConfig, SearchLimit, StockCatalog};
use crate::engine::{LinearScanMatcher, PrefixMatcher};
use crate::error::SearchResult;
use crate::interfaces::{
    MatchSet, NoOpEventHandler, SearchEvent, SearchEventHandler, StockMatcher,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

// ============================================================================
// Search Façade
// ============================================================================

/// A catalog handle, a matcher and the configuration for one search box.
///
/// Each search reads the handle's current catalog, so a search box built
/// before the catalog arrives (or kept across a logout) always sees what the
/// session holds now.
pub struct StockSearch {
    catalog: CatalogHandle,
    matcher: Box<dyn StockMatcher>,
    event_handler: Arc<dyn SearchEventHandler>,
    config: SearchConfig,
}

impl StockSearch {
    pub fn new(
        catalog: impl Into<CatalogHandle>,
        matcher: Box<dyn StockMatcher>,
        event_handler: Arc<dyn SearchEventHandler>,
        config: SearchConfig,
    ) -> Self {
        Self {
            catalog: catalog.into(),
            matcher,
            event_handler,
            config,
        }
    }

    /// Search with the configured default limit
    pub fn search(&self, query: &str) -> MatchSet {
        self.search_with_limit(query, self.config.default_limit)
    }

    pub fn search_with_limit(&self, query: &str, limit: SearchLimit) -> MatchSet {
        let catalog = self.catalog.current();
        let started = Instant::now();
        let outcome = self.matcher.search_detailed(&catalog, query, limit);

        self.event_handler.on_event(SearchEvent::SearchCompleted {
            query: query.to_string(),
            limit: limit.get(),
            prefix_hits: outcome.prefix_hits(),
            name_hits: outcome.name_hits(),
            elapsed: started.elapsed(),
            timestamp: Utc::now(),
        });

        outcome.into_matches()
    }

    /// Swap in a newly loaded catalog for every holder of the same handle
    pub fn replace_catalog(&self, catalog: impl Into<Arc<StockCatalog>>) {
        self.catalog.replace(catalog);
    }

    /// Snapshot of the catalog the next search will use
    pub fn catalog(&self) -> Arc<StockCatalog> {
        self.catalog.current()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn matcher_name(&self) -> &str {
        self.matcher.name()
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating search façades with fluent API
///
/// # Example
/// ```
/// use stock_typeahead::prelude::*;
/// use std::sync::Arc;
///
/// let catalog = Arc::new(StockCatalog::new(vec![StockEntry::new("AAPL", "Apple Inc")]));
/// let search = StockSearchBuilder::new(catalog)
///     .prefix_matching()
///     .with_default_limit(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(search.search("aa")[0].symbol(), "AAPL");
/// ```
pub struct StockSearchBuilder {
    catalog: CatalogHandle,
    matcher: Box<dyn StockMatcher>,
    event_handler: Arc<dyn SearchEventHandler>,
    config: SearchConfig,
}

impl StockSearchBuilder {
    pub fn new(catalog: impl Into<CatalogHandle>) -> Self {
        Self {
            catalog: catalog.into(),
            matcher: Box::new(PrefixMatcher),
            event_handler: Arc::new(NoOpEventHandler),
            config: SearchConfig::default(),
        }
    }

    /// Binary-search seeded matching (default)
    pub fn prefix_matching(mut self) -> Self {
        self.matcher = Box::new(PrefixMatcher);
        self
    }

    /// Linear scan matching
    pub fn linear_matching(mut self) -> Self {
        self.matcher = Box::new(LinearScanMatcher);
        self
    }

    pub fn with_matcher(mut self, matcher: Box<dyn StockMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.config.default_limit = SearchLimit::new(limit);
        self
    }

    pub fn with_navigation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.navigation_prefix = prefix.into();
        self
    }

    pub fn with_event_handler(mut self, handler: Arc<dyn SearchEventHandler>) -> Self {
        self.event_handler = handler;
        self
    }

    pub fn build(self) -> SearchResult<StockSearch> {
        self.config.validate()?;
        Ok(StockSearch::new(
            self.catalog,
            self.matcher,
            self.event_handler,
            self.config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StockEntry;
    use crate::error::SearchError;
    use crate::interfaces::MatchOutcome;
    use parking_lot::Mutex;

    /// Returns every entry regardless of the query
    struct EverythingMatcher;

    impl StockMatcher for EverythingMatcher {
        fn search_detailed(
            &self,
            catalog: &StockCatalog,
            _query: &str,
            limit: SearchLimit,
        ) -> MatchOutcome {
            MatchOutcome::new(catalog.iter().take(limit.get()).cloned().collect(), 0)
        }

        fn name(&self) -> &str {
            "everything"
        }
    }

    #[derive(Default)]
    struct Recording(Mutex<Vec<SearchEvent>>);

    impl SearchEventHandler for Recording {
        fn on_event(&self, event: SearchEvent) {
            self.0.lock().push(event);
        }
    }

    fn catalog() -> Arc<StockCatalog> {
        Arc::new(StockCatalog::new(vec![
            StockEntry::new("AA", "Alcoa"),
            StockEntry::new("AAPL", "Apple Inc"),
            StockEntry::new("ABNB", "Airbnb"),
            StockEntry::new("ACN", "Accenture"),
            StockEntry::new("ADBE", "Adobe"),
            StockEntry::new("AMD", "Advanced Micro Devices"),
            StockEntry::new("MSFT", "Microsoft Corp"),
        ]))
    }

    #[test]
    fn test_default_build() {
        let search = StockSearchBuilder::new(catalog()).build().unwrap();
        assert_eq!(search.matcher_name(), "prefix");
        assert_eq!(search.search("A").len(), 5);
        assert_eq!(search.search_with_limit("A", SearchLimit::new(2)).len(), 2);
    }

    #[test]
    fn test_builder_linear() {
        let search = StockSearchBuilder::new(catalog())
            .linear_matching()
            .with_default_limit(10)
            .build()
            .unwrap();

        assert_eq!(search.matcher_name(), "linear");
        assert_eq!(search.search("A").len(), 6);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = StockSearchBuilder::new(catalog())
            .with_navigation_prefix("stocks")
            .build();
        assert!(matches!(result, Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn test_search_emits_event() {
        let handler = Arc::new(Recording::default());
        let search = StockSearchBuilder::new(catalog())
            .with_event_handler(handler.clone())
            .build()
            .unwrap();

        search.search("mic");

        let events = handler.0.lock();
        assert_eq!(events.len(), 1);
        match &events[0] {
            SearchEvent::SearchCompleted {
                query,
                limit,
                prefix_hits,
                name_hits,
                ..
            } => {
                assert_eq!(query, "mic");
                assert_eq!(*limit, 5);
                assert_eq!(*prefix_hits, 0);
                assert_eq!(*name_hits, 1);
            },
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_custom_matcher() {
        let search = StockSearchBuilder::new(catalog())
            .with_matcher(Box::new(EverythingMatcher))
            .with_default_limit(3)
            .build()
            .unwrap();

        assert_eq!(search.matcher_name(), "everything");
        let results = search.search("zzz");
        let symbols: Vec<&str> = results.iter().map(|e| e.symbol()).collect();
        assert_eq!(symbols, vec!["AA", "AAPL", "ABNB"]);
    }

    #[test]
    fn test_replace_catalog() {
        let search = StockSearchBuilder::new(StockCatalog::empty()).build().unwrap();
        assert!(search.search("AA").is_empty());

        search.replace_catalog(catalog());
        assert_eq!(search.search("AA").len(), 2);
        assert_eq!(search.catalog().len(), 7);
    }

    #[test]
    fn test_search_reads_handle_on_every_call() {
        let handle = CatalogHandle::default();
        let search = StockSearchBuilder::new(handle.clone()).build().unwrap();
        assert!(search.search("MIC").is_empty());

        handle.replace(catalog());
        assert_eq!(search.search("MIC")[0].symbol(), "MSFT");

        handle.replace(StockCatalog::empty());
        assert!(search.search("MIC").is_empty());
    }
}
