//! Portfolio snapshot domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::CLASSIFICATION_NONE;

/// One uploaded valuation of an externally held portfolio.
///
/// Several snapshots may share an `account_number` (repeated uploads for
/// the same account). Which of them is "current" is a resolution decision,
/// never an assumption about insertion order; see
/// [`resolve_current`](super::resolve_current).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub id: String,
    /// External key linking repeated uploads to one account
    pub account_number: String,
    /// Statement date claimed by the upload, when the source provided one
    pub as_of_date: Option<NaiveDate>,
    /// When the snapshot row was created
    pub created_at: NaiveDateTime,
    /// Classification total stored with the snapshot by the reconciliation
    /// job; the engine reports it next to its own calculated value and
    /// never writes it
    pub private_equity_value: Decimal,
}

/// A single line item within a portfolio snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Snapshot this holding belongs to
    pub portfolio_id: String,
    pub market_value: Decimal,
    /// Valuation bucket tag; absent or "none" means untracked
    pub classification: Option<String>,
}

impl Holding {
    /// True when this holding carries a real classification tag.
    pub fn is_classified(&self) -> bool {
        match &self.classification {
            Some(tag) => tag != CLASSIFICATION_NONE,
            None => false,
        }
    }
}
