//! Goals domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a savings goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    /// Target amount to reach (> 0)
    pub target_amount: Decimal,
    /// Amount saved so far (>= 0)
    pub current_amount: Decimal,
    /// Optional deadline; no countdown is produced without one
    pub deadline: Option<NaiveDate>,
}

/// Evaluated state of one goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalStatus {
    pub goal_id: String,
    /// current / target as a percentage; may exceed 100
    pub completion_pct: Decimal,
    /// Whole days until the deadline; zero or negative means the deadline
    /// has passed, `None` means the goal has no deadline
    pub days_remaining: Option<i64>,
}
