// ============================================================================
// Typeahead Controller
// Drives the search box: query changes, keyboard navigation, selection
// ============================================================================

use super::factory::StockSearch;
use crate::domain::{DropdownState, DropdownTransition, StockEntry};
use crate::interfaces::MatchSet;
use std::sync::Arc;

/// Keys the search box reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Other,
}

/// Route to open after a confirmed selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub symbol: String,
    pub path: String,
}

/// What the caller should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeaheadAction {
    /// Key not consumed; let the input handle it
    Ignored,
    /// Key consumed (suppress default scrolling)
    Handled,
    Navigate(Navigation),
}

/// Search box state plus the matcher that feeds it.
///
/// Results are replaced wholesale on every query change.
pub struct Typeahead {
    search: StockSearch,
    query: String,
    results: MatchSet,
    active_index: usize,
    state: DropdownState,
}

impl Typeahead {
    pub fn new(search: StockSearch) -> Self {
        Self {
            search,
            query: String::new(),
            results: MatchSet::new(),
            active_index: 0,
            state: DropdownState::Closed,
        }
    }

    // ========================================================================
    // Event Handlers
    // ========================================================================

    pub fn on_input_change(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.open();

        if self.query.trim().is_empty() {
            self.results.clear();
        } else {
            self.results = self.search.search(&self.query);
        }
        self.active_index = 0;

        self.apply(DropdownTransition::ResultsChanged {
            result_count: self.results.len(),
        });
    }

    pub fn on_click(&mut self) {
        self.open();
    }

    pub fn on_focus(&mut self) {
        self.open();
    }

    /// Focus left the search box (e.g. a click outside it)
    pub fn on_blur(&mut self) {
        self.apply(DropdownTransition::Blur);
    }

    pub fn on_hover(&mut self, index: usize) {
        if index < self.results.len() {
            self.active_index = index;
        }
    }

    pub fn on_key(&mut self, key: Key) -> TypeaheadAction {
        match key {
            Key::ArrowDown => {
                self.open();
                let count = self.results.len();
                if count > 0 {
                    self.active_index = (self.active_index + 1) % count;
                }
                TypeaheadAction::Handled
            },
            Key::ArrowUp => {
                self.open();
                let count = self.results.len();
                if count > 0 {
                    self.active_index = (self.active_index + count - 1) % count;
                }
                TypeaheadAction::Handled
            },
            Key::Enter => match self.select(self.active_index) {
                Some(navigation) => TypeaheadAction::Navigate(navigation),
                None => TypeaheadAction::Ignored,
            },
            Key::Other => TypeaheadAction::Ignored,
        }
    }

    /// Confirm the result at `index` and close the dropdown
    pub fn select(&mut self, index: usize) -> Option<Navigation> {
        let entry = self.results.get(index).cloned()?;
        self.active_index = index;
        // Enter also confirms while the dropdown is closed
        if self.state.has_results() {
            self.apply(DropdownTransition::Confirm);
        } else {
            self.apply(DropdownTransition::Blur);
        }

        Some(Navigation {
            path: self.search.config().navigation_path(entry.symbol()),
            symbol: entry.symbol().to_string(),
        })
    }

    // ========================================================================
    // Getters
    // ========================================================================

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Arc<StockEntry>] {
        &self.results
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_entry(&self) -> Option<&Arc<StockEntry>> {
        self.results.get(self.active_index)
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The dropdown renders only while open and the query has text
    pub fn is_visible(&self) -> bool {
        self.is_open() && !self.query.is_empty()
    }

    pub fn search(&self) -> &StockSearch {
        &self.search
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn open(&mut self) {
        if !self.state.is_open() {
            self.apply(DropdownTransition::Open {
                result_count: self.results.len(),
            });
        }
    }

    fn apply(&mut self, transition: DropdownTransition) {
        match self.state.transition(transition) {
            Ok(next) => self.state = next,
            Err(err) => tracing::debug!(%err, "ignored dropdown transition"),
        }
    }
}
