// ============================================================================
// Engine Module
// Contains the typeahead matchers and the components built on them
// ============================================================================

mod linear;
mod passes;
mod prefix;
mod typeahead;

pub mod factory;

pub use factory::{StockSearch, StockSearchBuilder};
pub use linear::LinearScanMatcher;
pub use prefix::{find_start_index, search, PrefixMatcher};
pub use typeahead::{Key, Navigation, Typeahead, TypeaheadAction};
