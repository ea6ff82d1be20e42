//! Threshold signal models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A threshold crossing observed while evaluating a dashboard snapshot.
///
/// Signals are advisory facts for the notification collaborator; they
/// duplicate nothing the summary itself does not already contain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ThresholdSignal {
    /// A budget reached the over-budget threshold.
    #[serde(rename_all = "camelCase")]
    BudgetOverThreshold {
        budget_id: String,
        utilization_pct: Decimal,
    },
    /// A goal reached or passed full completion.
    #[serde(rename_all = "camelCase")]
    GoalReached {
        goal_id: String,
        completion_pct: Decimal,
    },
}
