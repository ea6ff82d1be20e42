//! Dashboard domain models.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::accounts::Account;
use crate::budgets::{Budget, BudgetStatus};
use crate::cashflow::CashFlowBucket;
use crate::goals::{Goal, GoalStatus};
use crate::health::HealthReport;
use crate::net_worth::NetWorthSummary;
use crate::portfolio::classification::ClassificationSummary;
use crate::portfolio::snapshot::{Holding, PortfolioSnapshot};
use crate::spending::CategorySpending;
use crate::transactions::Transaction;

/// One user's complete record snapshot, as read from the record store.
///
/// Callers are responsible for fetching all collections within one read
/// transaction; the engine does not detect read-skew between them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardInput {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
    pub snapshots: Vec<PortfolioSnapshot>,
    pub holdings: Vec<Holding>,
    /// Evaluation date for goal countdowns
    pub as_of: NaiveDate,
}

/// Kind of a non-fatal warning raised during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningKind {
    /// A transaction references an account absent from the snapshot
    UnresolvedAccount,
    /// A holding references a portfolio snapshot absent from the snapshot
    UnresolvedSnapshot,
}

/// Non-fatal degradation detected while evaluating a snapshot.
///
/// Warnings accompany an otherwise complete result; strict callers can
/// treat their presence as a validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngineWarning {
    pub kind: WarningKind,
    /// Id of the record carrying the dangling reference
    pub entity_id: String,
    pub message: String,
}

/// Everything the dashboard displays, computed in one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub net_worth: NetWorthSummary,
    /// Per-category spend, descending
    pub spending: Vec<CategorySpending>,
    /// Weekly buckets, ascending by week start
    pub cash_flow: Vec<CashFlowBucket>,
    pub budgets: Vec<BudgetStatus>,
    pub goals: Vec<GoalStatus>,
    /// Classification totals keyed by account number
    pub private_equity: HashMap<String, ClassificationSummary>,
    pub health: HealthReport,
    pub warnings: Vec<EngineWarning>,
}
