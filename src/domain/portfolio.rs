// ============================================================================
// Portfolio Domain Model
// Holdings and transaction history as served by the trading backend
// ============================================================================

use crate::error::TradeError;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Page size the portfolio view requests
pub const DEFAULT_PER_PAGE: u32 = 10;

// ============================================================================
// Value Objects
// ============================================================================

/// Backend view of a listed stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockData {
    pub id: Uuid,
    pub symbol: String,
    pub company_name: String,
    pub industry: String,
    pub sector: String,
}

/// A position held by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStock {
    pub id: Uuid,
    pub user_id: Uuid,
    pub stock_id: Uuid,
    pub quantity: u64,
    pub stock: StockData,
    #[serde(default)]
    pub website: Option<String>,
}

impl UserStock {
    pub fn share_label(&self) -> String {
        share_label(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Buy => write!(f, "buy"),
            TransactionType::Sell => write!(f, "sell"),
        }
    }
}

/// A settled buy or sell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub stock_id: Uuid,
    pub transaction_type: TransactionType,
    pub quantity: u64,
    pub cost_per_share: Decimal,
    pub total_cost: Decimal,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    pub stock: StockData,
}

impl Transaction {
    /// Total cost with the sign of the cash flow (buys are outflows)
    pub fn signed_total(&self) -> Decimal {
        match self.transaction_type {
            TransactionType::Buy => -self.total_cost,
            TransactionType::Sell => self.total_cost,
        }
    }
}

// ============================================================================
// Trade Orders
// ============================================================================

/// Body of a `POST /stocks/buy` or `POST /stocks/sell` request.
///
/// Built only through [`TradeRequest::new`], which applies the checks the
/// trade form runs before submitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeRequest {
    #[serde(skip)]
    pub transaction_type: TransactionType,
    pub symbol: String,
    pub quantity: u64,
    pub current_price: Decimal,
}

impl TradeRequest {
    /// Validate a trade form submission.
    ///
    /// `held` is the caller's current position in `symbol` (0 when none).
    pub fn new(
        transaction_type: TransactionType,
        symbol: impl Into<String>,
        quantity: i64,
        current_price: Decimal,
        held: u64,
    ) -> Result<Self, TradeError> {
        let quantity = match u64::try_from(quantity) {
            Ok(q) if q > 0 => q,
            _ => return Err(TradeError::NonPositiveQuantity(quantity)),
        };

        if transaction_type == TransactionType::Sell && held < quantity {
            return Err(TradeError::InsufficientShares {
                held,
                requested: quantity,
            });
        }

        if current_price <= Decimal::ZERO {
            return Err(TradeError::NonPositivePrice(current_price));
        }

        Ok(Self {
            transaction_type,
            symbol: symbol.into(),
            quantity,
            current_price,
        })
    }

    /// Validate against an existing holding, or none
    pub fn for_holding(
        transaction_type: TransactionType,
        symbol: impl Into<String>,
        quantity: i64,
        current_price: Decimal,
        holding: Option<&UserStock>,
    ) -> Result<Self, TradeError> {
        let held = holding.map_or(0, |h| h.quantity);
        Self::new(transaction_type, symbol, quantity, current_price, held)
    }

    /// Price times quantity, as shown before confirming
    pub fn estimated_cost(&self) -> Decimal {
        self.current_price * Decimal::from(self.quantity)
    }

    pub fn endpoint(&self) -> String {
        format!("/stocks/{}", self.transaction_type)
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// One page of `/users/me/transactions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub page: u32,
    pub per_page: u32,
    pub total_transactions: Option<u64>,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Default for TransactionPage {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            total_transactions: None,
            has_next: false,
            has_prev: false,
        }
    }
}

/// Previous/next navigation over transaction pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: u32,
    pub per_page: u32,
    has_next: bool,
    has_prev: bool,
    total: Option<u64>,
}

impl PageCursor {
    pub fn from_page(page: &TransactionPage) -> Self {
        Self {
            page: page.page,
            per_page: page.per_page,
            has_next: page.has_next,
            has_prev: page.has_prev,
            total: page.total_transactions,
        }
    }

    pub fn next(&self) -> Option<u32> {
        if self.has_next {
            self.page.checked_add(1)
        } else {
            None
        }
    }

    pub fn previous(&self) -> Option<u32> {
        if self.has_prev {
            self.page.checked_sub(1).filter(|p| *p >= 1)
        } else {
            None
        }
    }

    /// Pagination controls are shown only when there is history at all
    pub fn should_paginate(&self) -> bool {
        matches!(self.total, Some(n) if n > 0)
    }
}

/// Request path for one page of transaction history
pub fn transactions_query(page: u32, per_page: u32) -> String {
    format!("/users/me/transactions?page={page}&per_page={per_page}")
}

// ============================================================================
// Formatting
// ============================================================================

pub fn share_label(quantity: u64) -> String {
    match quantity {
        1 => "1 share".to_string(),
        n => format!("{n} shares"),
    }
}

/// Format an amount as en-US dollars, e.g. `-$1,234.50`
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", if negative { "-" } else { "" }, grouped, cents)
}
