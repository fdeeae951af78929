// ============================================================================
// Search Limit
// ============================================================================

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of matches a search may return.
///
/// Negative and fractional limits are rejected at construction, so every
/// `SearchLimit` is a plain non-negative count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct SearchLimit(usize);

impl SearchLimit {
    pub const DEFAULT: SearchLimit = SearchLimit(5);
    pub const ZERO: SearchLimit = SearchLimit(0);

    pub const fn new(limit: usize) -> Self {
        Self(limit)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for SearchLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<usize> for SearchLimit {
    fn from(limit: usize) -> Self {
        Self(limit)
    }
}

impl From<SearchLimit> for u64 {
    fn from(limit: SearchLimit) -> Self {
        limit.0 as u64
    }
}

impl TryFrom<i64> for SearchLimit {
    type Error = SearchError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map(Self)
            .map_err(|_| SearchError::InvalidLimit(value.to_string()))
    }
}

impl TryFrom<f64> for SearchLimit {
    type Error = SearchError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > usize::MAX as f64
        {
            return Err(SearchError::InvalidLimit(value.to_string()));
        }
        Ok(Self(value as usize))
    }
}

impl fmt::Display for SearchLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
