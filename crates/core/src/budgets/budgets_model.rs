//! Budget domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing a spending budget for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category: String,
    /// Amount allocated for the period (>= 0)
    pub allocated: Decimal,
    /// Amount spent so far in the period (>= 0)
    pub spent: Decimal,
    /// Period label, e.g. "monthly"
    pub period: String,
}

impl Budget {
    /// Validates the budget amounts. Advisory only; the evaluator itself
    /// degrades gracefully on any well-typed input.
    pub fn validate(&self) -> Result<()> {
        if self.allocated < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount {
                field: "allocated",
                value: self.allocated.to_string(),
            }
            .into());
        }
        if self.spent < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount {
                field: "spent",
                value: self.spent.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Evaluated state of one budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub budget_id: String,
    /// spent / allocated as a percentage; 0 when nothing is allocated
    pub utilization_pct: Decimal,
    /// True when utilization reaches the over-budget threshold
    pub is_over_budget: bool,
}
