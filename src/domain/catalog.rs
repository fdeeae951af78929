// ============================================================================
// Stock Catalog
// Immutable, symbol-sorted list of tradable stocks
// ============================================================================

use super::stock::{StockEntry, StockRecord};
use crate::error::CatalogError;
use parking_lot::RwLock;
use std::io::Read;
use std::sync::Arc;

/// The session's list of tradable stocks, sorted ascending by symbol.
///
/// Sorting happens once, in the constructor, using byte-wise comparison of
/// the symbol. The prefix matcher relies on this order; nothing mutates the
/// catalog afterwards.
#[derive(Debug, Clone, Default)]
pub struct StockCatalog {
    entries: Vec<Arc<StockEntry>>,
}

impl StockCatalog {
    /// Build a catalog from entries in any order.
    pub fn new(entries: impl IntoIterator<Item = StockEntry>) -> Self {
        let mut entries: Vec<Arc<StockEntry>> = entries.into_iter().map(Arc::new).collect();
        entries.sort_by(|a, b| a.symbol().cmp(b.symbol()));
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = StockRecord>) -> Self {
        Self::new(records.into_iter().map(StockEntry::from))
    }

    /// Parse a JSON array of `{symbol, company_name}` records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<StockRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let records: Vec<StockRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<StockEntry>> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Arc<StockEntry>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<StockEntry>> {
        self.entries.iter()
    }

    /// Exact symbol lookup (case-sensitive). With duplicate symbols the
    /// first entry in catalog order is returned.
    pub fn find_symbol(&self, symbol: &str) -> Option<&Arc<StockEntry>> {
        let index = self.entries.partition_point(|entry| entry.symbol() < symbol);
        self.entries
            .get(index)
            .filter(|entry| entry.symbol() == symbol)
    }
}

// ============================================================================
// Shared Handle
// ============================================================================

/// Swappable reference to the session's current catalog.
///
/// Clones share the same slot: a catalog installed through one clone is seen
/// by every other on its next [`current`](Self::current) call. Readers get an
/// `Arc` snapshot and never search under the lock.
#[derive(Debug, Clone, Default)]
pub struct CatalogHandle {
    current: Arc<RwLock<Arc<StockCatalog>>>,
}

impl CatalogHandle {
    pub fn new(catalog: impl Into<Arc<StockCatalog>>) -> Self {
        Self {
            current: Arc::new(RwLock::new(catalog.into())),
        }
    }

    pub fn current(&self) -> Arc<StockCatalog> {
        Arc::clone(&*self.current.read())
    }

    pub fn replace(&self, catalog: impl Into<Arc<StockCatalog>>) {
        *self.current.write() = catalog.into();
    }
}

impl From<StockCatalog> for CatalogHandle {
    fn from(catalog: StockCatalog) -> Self {
        Self::new(catalog)
    }
}

impl From<Arc<StockCatalog>> for CatalogHandle {
    fn from(catalog: Arc<StockCatalog>) -> Self {
        Self::new(catalog)
    }
}

impl<'a> IntoIterator for &'a StockCatalog {
    type Item = &'a Arc<StockEntry>;
    type IntoIter = std::slice::Iter<'a, Arc<StockEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<StockEntry> for StockCatalog {
    fn from_iter<I: IntoIterator<Item = StockEntry>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(catalog: &StockCatalog) -> Vec<&str> {
        catalog.iter().map(|e| e.symbol()).collect()
    }

    #[test]
    fn test_sorted_on_construction() {
        let catalog = StockCatalog::new(vec![
            StockEntry::new("MSFT", "Microsoft Corp"),
            StockEntry::new("AAPL", "Apple Inc"),
            StockEntry::new("AA", "Alcoa"),
        ]);

        assert_eq!(symbols(&catalog), vec!["AA", "AAPL", "MSFT"]);
    }

    #[test]
    fn test_ordinal_ordering() {
        // Uppercase sorts before lowercase, digits before letters
        let catalog = StockCatalog::new(vec![
            StockEntry::new("b", "lower"),
            StockEntry::new("B", "upper"),
            StockEntry::new("1A", "digit"),
        ]);

        assert_eq!(symbols(&catalog), vec!["1A", "B", "b"]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"symbol": "MSFT", "company_name": "Microsoft Corp"},
            {"symbol": "AA", "company_name": "Alcoa"}
        ]"#;
        let catalog = StockCatalog::from_json_str(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().symbol(), "AA");
        assert_eq!(catalog.get(1).unwrap().company_name_upper(), "MICROSOFT CORP");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            StockCatalog::from_json_str("{not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(StockCatalog::from_json_str(r#"[{"symbol": 1}]"#).is_err());
    }

    #[test]
    fn test_find_symbol() {
        let catalog: StockCatalog = vec![
            StockEntry::new("AAPL", "Apple Inc"),
            StockEntry::new("AA", "Alcoa"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.find_symbol("AAPL").unwrap().company_name(), "Apple Inc");
        assert!(catalog.find_symbol("aapl").is_none());
        assert!(StockCatalog::empty().find_symbol("AA").is_none());
        assert!(catalog.find_symbol("AAP").is_none());
        assert!(catalog.find_symbol("ZZ").is_none());
    }

    #[test]
    fn test_find_symbol_returns_first_duplicate() {
        let catalog = StockCatalog::new(vec![
            StockEntry::new("AA", "Alcoa"),
            StockEntry::new("GOOG", "Alphabet Class C"),
            StockEntry::new("GOOG", "Alphabet Class A"),
            StockEntry::new("GOOG", "Alphabet Legacy"),
            StockEntry::new("MSFT", "Microsoft Corp"),
        ]);

        for _ in 0..3 {
            assert_eq!(
                catalog.find_symbol("GOOG").unwrap().company_name(),
                "Alphabet Class C"
            );
        }
    }

    #[test]
    fn test_handle_clones_share_catalog() {
        let handle = CatalogHandle::default();
        let reader = handle.clone();
        assert!(reader.current().is_empty());

        let before = reader.current();
        handle.replace(StockCatalog::new(vec![StockEntry::new("AA", "Alcoa")]));

        assert_eq!(reader.current().len(), 1);
        assert!(before.is_empty());
    }
}
