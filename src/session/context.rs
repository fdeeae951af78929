// ============================================================================
// Session Context
// ============================================================================

use crate::domain::{CatalogHandle, SearchConfig, StockCatalog, User};
use crate::engine::StockSearchBuilder;
use crate::interfaces::{
    CatalogSource, JsonFileSource, NoOpEventHandler, SearchEvent, SearchEventHandler,
};
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;

/// Snapshot of the session state
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<User>,
    pub catalog: Arc<StockCatalog>,
    pub catalog_loaded: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug, Default)]
struct SessionState {
    user: Option<User>,
    catalog_loaded: bool,
}

/// Owns the session from login to logout.
///
/// Created once at startup and passed to whatever needs it. Search boxes
/// built from [`search_builder`](Self::search_builder) share the session's
/// catalog handle, so they pick up a late catalog load and go empty on
/// logout.
pub struct SessionContext {
    inner: RwLock<SessionState>,
    catalog: CatalogHandle,
    event_handler: Arc<dyn SearchEventHandler>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::with_event_handler(Arc::new(NoOpEventHandler))
    }

    pub fn with_event_handler(event_handler: Arc<dyn SearchEventHandler>) -> Self {
        Self {
            inner: RwLock::new(SessionState::default()),
            catalog: CatalogHandle::default(),
            event_handler,
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    pub fn login(&self, user: User) {
        tracing::info!(user_id = %user.id, "session started");
        self.inner.write().user = Some(user);
    }

    /// Drop the user and the catalog
    pub fn logout(&self) {
        let mut state = self.inner.write();
        if let Some(user) = state.user.take() {
            tracing::info!(user_id = %user.id, "session ended");
        }
        state.catalog_loaded = false;
        self.catalog.replace(StockCatalog::empty());
    }

    pub fn install_catalog(&self, catalog: StockCatalog) {
        let entries = catalog.len();
        {
            let mut state = self.inner.write();
            self.catalog.replace(catalog);
            state.catalog_loaded = true;
        }
        self.event_handler.on_event(SearchEvent::CatalogLoaded {
            entries,
            timestamp: Utc::now(),
        });
    }

    /// Load and install the catalog; a failed load installs an empty one
    pub fn load_catalog(&self, source: &dyn CatalogSource) {
        match source.load() {
            Ok(catalog) => {
                tracing::info!(
                    source = %source.describe(),
                    entries = catalog.len(),
                    "stock catalog loaded"
                );
                self.install_catalog(catalog);
            },
            Err(err) => {
                tracing::warn!(
                    source = %source.describe(),
                    error = %err,
                    "stock catalog unavailable, using empty catalog"
                );
                self.event_handler.on_event(SearchEvent::CatalogUnavailable {
                    reason: err.to_string(),
                    timestamp: Utc::now(),
                });
                self.install_catalog(StockCatalog::empty());
            },
        }
    }

    /// Load the catalog asset named by `config`, if any.
    ///
    /// Returns false when the config has no catalog path.
    pub fn load_configured_catalog(&self, config: &SearchConfig) -> bool {
        match &config.catalog_path {
            Some(path) => {
                self.load_catalog(&JsonFileSource::new(path));
                true
            },
            None => false,
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().user.is_some()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.read().user.clone()
    }

    pub fn catalog(&self) -> Arc<StockCatalog> {
        self.catalog.current()
    }

    /// Shared handle to the session catalog
    pub fn catalog_handle(&self) -> CatalogHandle {
        self.catalog.clone()
    }

    pub fn catalog_loaded(&self) -> bool {
        self.inner.read().catalog_loaded
    }

    pub fn snapshot(&self) -> Session {
        let state = self.inner.read();
        Session {
            user: state.user.clone(),
            catalog: self.catalog.current(),
            catalog_loaded: state.catalog_loaded,
        }
    }

    /// Search builder that follows the session catalog
    pub fn search_builder(&self) -> StockSearchBuilder {
        StockSearchBuilder::new(self.catalog_handle())
    }
}
