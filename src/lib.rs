// ============================================================================
// Stock Typeahead Library
// Client-side stock search, catalog and session state for a trading front end
// ============================================================================

//! # Stock Typeahead
//!
//! The client-side core of a stock-trading front end.
//!
//! ## Features
//!
//! - **Typeahead matching** over a symbol-sorted catalog: binary-search
//!   seeded ticker prefix pass, then a company-name fill pass
//! - **Dropdown state machine** with wrap-around keyboard navigation
//! - **Catalog loading** from a static JSON asset that degrades to an empty
//!   catalog instead of failing
//! - **Session context** with explicit login/logout lifecycle
//! - **Portfolio wire types** for holdings and paginated transaction history
//!
//! ## Example
//!
//! ```rust
//! use stock_typeahead::prelude::*;
//!
//! let catalog = StockCatalog::new(vec![
//!     StockEntry::new("MSFT", "Microsoft Corp"),
//!     StockEntry::new("AAPL", "Apple Inc"),
//!     StockEntry::new("AA", "Alcoa"),
//! ]);
//!
//! let results = search(&catalog, "aa", SearchLimit::DEFAULT);
//! let symbols: Vec<&str> = results.iter().map(|e| e.symbol()).collect();
//! assert_eq!(symbols, vec!["AA", "AAPL"]);
//!
//! // No ticker starts with "MIC"; the company-name pass finds Microsoft
//! assert_eq!(search(&catalog, "MIC", SearchLimit::DEFAULT)[0].symbol(), "MSFT");
//! ```

pub mod domain;
pub mod engine;
pub mod error;
pub mod interfaces;
pub mod session;

#[cfg(feature = "logging")]
pub mod logging;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CatalogHandle, DropdownState, DropdownTransition, SearchConfig, SearchLimit, StockCatalog,
        StockEntry, StockRecord, User,
    };
    pub use crate::engine::{
        find_start_index, search, Key, LinearScanMatcher, Navigation, PrefixMatcher, StockSearch,
        StockSearchBuilder, Typeahead, TypeaheadAction,
    };
    pub use crate::error::{CatalogError, SearchError, SearchResult, TradeError, TransitionError};
    pub use crate::interfaces::{
        load_or_empty, CatalogSource, JsonFileSource, LoggingEventHandler, MatchOutcome,
        MatchSet, NoOpEventHandler, SearchEvent, SearchEventHandler, StaticSource, StockMatcher,
    };
    pub use crate::session::{Session, SessionContext};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    const CATALOG_JSON: &str = r#"[
        {"symbol": "MSFT", "company_name": "Microsoft Corp"},
        {"symbol": "AAPL", "company_name": "Apple Inc"},
        {"symbol": "AA", "company_name": "Alcoa"}
    ]"#;

    #[test]
    fn test_end_to_end_search_session() {
        let ctx = SessionContext::new();
        ctx.login(User::new("ada@example.com", "Ada", "Lovelace"));

        // The search box is mounted before the catalog finishes loading
        let search = ctx
            .search_builder()
            .with_event_handler(Arc::new(LoggingEventHandler))
            .build()
            .unwrap();
        let mut typeahead = Typeahead::new(search);
        assert_eq!(typeahead.search().matcher_name(), "prefix");

        let source = StaticSource::new(serde_json::from_str(CATALOG_JSON).unwrap());
        ctx.load_catalog(&source);

        typeahead.on_focus();
        typeahead.on_input_change("mic");
        assert_eq!(typeahead.state(), DropdownState::OpenWithResults);

        let action = typeahead.on_key(Key::Enter);
        assert_eq!(
            action,
            TypeaheadAction::Navigate(Navigation {
                symbol: "MSFT".to_string(),
                path: "/stocks/MSFT".to_string(),
            })
        );
        assert!(!typeahead.is_open());

        ctx.logout();
        assert!(ctx.catalog().is_empty());

        typeahead.on_input_change("mic");
        assert_eq!(typeahead.state(), DropdownState::OpenEmpty);
    }

    #[test]
    fn test_catalog_scenarios() {
        let catalog = StockCatalog::from_json_str(CATALOG_JSON).unwrap();
        let symbols = |q: &str, limit: usize| -> Vec<String> {
            search(&catalog, q, SearchLimit::new(limit))
                .iter()
                .map(|e| e.symbol().to_string())
                .collect()
        };

        assert_eq!(symbols("AA", 5), vec!["AA", "AAPL"]);
        assert_eq!(symbols("MIC", 5), vec!["MSFT"]);
        assert!(symbols("ZZZ", 5).is_empty());
        assert_eq!(symbols("A", 1), vec!["AA"]);
    }
}
