//! Budget service traits.

use rust_decimal::Decimal;

use super::budgets_model::{Budget, BudgetStatus};
use crate::errors::Result;

/// Trait defining the contract for budget evaluation.
pub trait BudgetServiceTrait: Send + Sync {
    /// Evaluate a single budget's utilization and over-budget flag.
    fn evaluate(&self, budget: &Budget) -> Result<BudgetStatus>;

    /// Evaluate every budget, preserving input order.
    fn evaluate_all(&self, budgets: &[Budget]) -> Result<Vec<BudgetStatus>>;

    /// Utilization across all budgets, computed over summed allocated and
    /// spent amounts with the same zero-denominator guard.
    fn aggregate_utilization(&self, budgets: &[Budget]) -> Result<Decimal>;
}
