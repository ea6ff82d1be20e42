//! Budget evaluation service implementation.

use log::debug;
use rust_decimal::Decimal;

use super::budgets_model::{Budget, BudgetStatus};
use super::budgets_traits::BudgetServiceTrait;
use crate::constants::OVER_BUDGET_THRESHOLD_PCT;
use crate::errors::Result;
use crate::utils::numeric_utils::percent_of;

/// Service evaluating budget utilization.
#[derive(Debug, Default)]
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    fn over_threshold(utilization_pct: Decimal) -> bool {
        utilization_pct >= Decimal::from(OVER_BUDGET_THRESHOLD_PCT)
    }
}

impl BudgetServiceTrait for BudgetService {
    fn evaluate(&self, budget: &Budget) -> Result<BudgetStatus> {
        let utilization_pct = percent_of(budget.spent, budget.allocated);

        Ok(BudgetStatus {
            budget_id: budget.id.clone(),
            utilization_pct,
            is_over_budget: Self::over_threshold(utilization_pct),
        })
    }

    fn evaluate_all(&self, budgets: &[Budget]) -> Result<Vec<BudgetStatus>> {
        debug!("Evaluating {} budgets", budgets.len());
        budgets.iter().map(|b| self.evaluate(b)).collect()
    }

    fn aggregate_utilization(&self, budgets: &[Budget]) -> Result<Decimal> {
        let total_allocated: Decimal = budgets.iter().map(|b| b.allocated).sum();
        let total_spent: Decimal = budgets.iter().map(|b| b.spent).sum();

        Ok(percent_of(total_spent, total_allocated))
    }
}
