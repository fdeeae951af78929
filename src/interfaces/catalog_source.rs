// ============================================================================
// Catalog Source Interface
// Where the session's stock catalog comes from
// ============================================================================

use crate::domain::{StockCatalog, StockRecord};
use crate::error::CatalogError;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Produces a stock catalog once per session
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<StockCatalog, CatalogError>;

    /// Human-readable origin for logs
    fn describe(&self) -> String;
}

/// JSON array of `{symbol, company_name}` records on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> Result<StockCatalog, CatalogError> {
        let file = File::open(&self.path)?;
        StockCatalog::from_reader(BufReader::new(file))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Records already in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<StockRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<StockRecord>) -> Self {
        Self { records }
    }
}

impl CatalogSource for StaticSource {
    fn load(&self) -> Result<StockCatalog, CatalogError> {
        Ok(StockCatalog::from_records(self.records.iter().cloned()))
    }

    fn describe(&self) -> String {
        format!("static ({} records)", self.records.len())
    }
}

/// Load a catalog, falling back to an empty one on any failure.
///
/// A missing or malformed asset is never surfaced to the user; searches just
/// return nothing.
pub fn load_or_empty(source: &dyn CatalogSource) -> StockCatalog {
    match source.load() {
        Ok(catalog) => {
            tracing::info!(
                source = %source.describe(),
                entries = catalog.len(),
                "stock catalog loaded"
            );
            catalog
        },
        Err(err) => {
            tracing::warn!(
                source = %source.describe(),
                error = %err,
                "stock catalog unavailable, using empty catalog"
            );
            StockCatalog::empty()
        },
    }
}

/// Read the catalog asset without blocking the runtime; degrades like
/// [`load_or_empty`].
#[cfg(feature = "async")]
pub async fn load_catalog_async(path: impl AsRef<Path>) -> StockCatalog {
    let path = path.as_ref();
    let parsed = match tokio::fs::read(path).await {
        Ok(bytes) => serde_json::from_slice::<Vec<StockRecord>>(&bytes)
            .map(StockCatalog::from_records)
            .map_err(CatalogError::from),
        Err(err) => Err(CatalogError::from(err)),
    };

    match parsed {
        Ok(catalog) => {
            tracing::info!(source = %path.display(), entries = catalog.len(), "stock catalog loaded");
            catalog
        },
        Err(err) => {
            tracing::warn!(
                source = %path.display(),
                error = %err,
                "stock catalog unavailable, using empty catalog"
            );
            StockCatalog::empty()
        },
    }
}
