// ============================================================================
// Errors
// ============================================================================

use crate::domain::dropdown::{DropdownState, DropdownTransition};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while loading the stock catalog.
///
/// Callers normally go through `load_or_empty`, which logs these and falls
/// back to an empty catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog asset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog asset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by search configuration and input validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid search limit: {0}")]
    InvalidLimit(String),

    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}

/// A dropdown transition that is not allowed from the current state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid transition from {from:?} via {transition:?}")]
pub struct TransitionError {
    pub from: DropdownState,
    pub transition: DropdownTransition,
}

/// A buy or sell order rejected before it is sent to the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeError {
    #[error("quantity must be a positive integer greater than 0, got {0}")]
    NonPositiveQuantity(i64),

    #[error("not enough shares to sell: holding {held}, requested {requested}")]
    InsufficientShares { held: u64, requested: u64 },

    #[error("current price must be positive, got {0}")]
    NonPositivePrice(Decimal),
}

pub type SearchResult<T> = Result<T, SearchError>;
