// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod catalog;
pub mod config;
pub mod dropdown;
pub mod limit;
pub mod portfolio;
pub mod stock;
pub mod user;

mod timestamp;

pub use catalog::{CatalogHandle, StockCatalog};
pub use config::SearchConfig;
pub use dropdown::{DropdownState, DropdownTransition};
pub use limit::SearchLimit;
pub use portfolio::{
    format_money, share_label, PageCursor, StockData, TradeRequest, Transaction,
    TransactionPage, TransactionType, UserStock,
};
pub use stock::{StockEntry, StockRecord};
pub use user::User;
