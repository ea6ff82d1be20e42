//! Cash flow service traits.

use super::cashflow_model::CashFlowBucket;
use crate::errors::Result;
use crate::transactions::Transaction;

/// Trait defining the contract for weekly cash-flow bucketing.
pub trait CashFlowServiceTrait: Send + Sync {
    /// Group transactions into calendar-week buckets.
    ///
    /// Buckets are keyed by the underlying week-start date, returned in
    /// ascending date order, and truncated to the most recent
    /// `max_weeks`. Income sums positive income amounts; expenses sum
    /// expense magnitudes; transfers are excluded from both.
    fn weekly_buckets(
        &self,
        transactions: &[Transaction],
        max_weeks: usize,
    ) -> Result<Vec<CashFlowBucket>>;
}
