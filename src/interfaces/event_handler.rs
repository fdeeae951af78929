// ============================================================================
// Search Event Handler Interface
// Defines the contract for observing searches and catalog lifecycle
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Events emitted by the search façade and session context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchEvent {
    /// A query ran against the catalog
    SearchCompleted {
        query: String,
        limit: usize,
        prefix_hits: usize,
        name_hits: usize,
        elapsed: Duration,
        timestamp: DateTime<Utc>,
    },

    /// A catalog was installed for the session
    CatalogLoaded {
        entries: usize,
        timestamp: DateTime<Utc>,
    },

    /// Catalog loading failed and the session fell back to an empty catalog
    CatalogUnavailable {
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing search events
/// Implementations can handle logging, metrics, analytics, etc.
pub trait SearchEventHandler: Send + Sync {
    /// Handle a search event
    fn on_event(&self, event: SearchEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<SearchEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl SearchEventHandler for NoOpEventHandler {
    fn on_event(&self, _event: SearchEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl SearchEventHandler for LoggingEventHandler {
    fn on_event(&self, event: SearchEvent) {
        match &event {
            SearchEvent::CatalogUnavailable { reason, .. } => {
                tracing::warn!(%reason, "stock catalog unavailable");
            },
            _ => tracing::debug!("Search event: {:?}", event),
        }
    }
}
