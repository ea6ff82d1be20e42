//! Net worth domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated balance-sheet totals across active accounts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSummary {
    /// Sum of positive balances
    pub total_assets: Decimal,
    /// Magnitude of the sum of negative balances (always >= 0)
    pub total_liabilities: Decimal,
    /// total_assets - total_liabilities
    pub net_worth: Decimal,
}

impl NetWorthSummary {
    /// An all-zero summary, used when no accounts are supplied.
    pub fn empty() -> Self {
        Self::default()
    }
}
