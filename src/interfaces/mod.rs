// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod catalog_source;
mod event_handler;
mod matcher;

#[cfg(feature = "async")]
pub use catalog_source::load_catalog_async;
pub use catalog_source::{load_or_empty, CatalogSource, JsonFileSource, StaticSource};
pub use event_handler::{LoggingEventHandler, NoOpEventHandler, SearchEvent, SearchEventHandler};
pub use matcher::{MatchOutcome, MatchSet, StockMatcher};
