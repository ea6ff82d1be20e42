//! Net worth service traits.

use super::net_worth_model::NetWorthSummary;
use crate::accounts::Account;
use crate::errors::Result;

/// Trait defining the contract for net worth aggregation.
pub trait NetWorthServiceTrait: Send + Sync {
    /// Aggregate account balances into assets, liabilities and net worth.
    ///
    /// Only active accounts participate. Positive balances accumulate into
    /// `total_assets`; negative balances accumulate (as a positive
    /// magnitude) into `total_liabilities`. An empty input yields an
    /// all-zero summary, never an error.
    fn summarize(&self, accounts: &[Account]) -> Result<NetWorthSummary>;
}
