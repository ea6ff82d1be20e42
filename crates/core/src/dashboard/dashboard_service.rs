//! Dashboard evaluation service implementation.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, warn};
use rust_decimal::Decimal;

use super::dashboard_model::{DashboardInput, DashboardSummary, EngineWarning, WarningKind};
use super::dashboard_traits::DashboardServiceTrait;
use crate::budgets::{BudgetService, BudgetServiceTrait, BudgetStatus};
use crate::cashflow::{CashFlowService, CashFlowServiceTrait};
use crate::constants::DEFAULT_CASH_FLOW_WEEKS;
use crate::errors::Result;
use crate::goals::{GoalService, GoalServiceTrait, GoalStatus};
use crate::health::{HealthService, HealthServiceTrait};
use crate::net_worth::{NetWorthService, NetWorthServiceTrait};
use crate::portfolio::classification::{ClassificationService, ClassificationServiceTrait};
use crate::signals::{SignalHandlerTrait, ThresholdSignal};
use crate::spending::{SpendingService, SpendingServiceTrait};

/// Service evaluating a full user snapshot in one pass.
pub struct DashboardService {
    net_worth_service: Arc<dyn NetWorthServiceTrait>,
    spending_service: Arc<dyn SpendingServiceTrait>,
    cashflow_service: Arc<dyn CashFlowServiceTrait>,
    budget_service: Arc<dyn BudgetServiceTrait>,
    goal_service: Arc<dyn GoalServiceTrait>,
    classification_service: Arc<dyn ClassificationServiceTrait>,
    health_service: Arc<dyn HealthServiceTrait>,
    signal_handler: Option<Arc<dyn SignalHandlerTrait>>,
}

impl DashboardService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        net_worth_service: Arc<dyn NetWorthServiceTrait>,
        spending_service: Arc<dyn SpendingServiceTrait>,
        cashflow_service: Arc<dyn CashFlowServiceTrait>,
        budget_service: Arc<dyn BudgetServiceTrait>,
        goal_service: Arc<dyn GoalServiceTrait>,
        classification_service: Arc<dyn ClassificationServiceTrait>,
        health_service: Arc<dyn HealthServiceTrait>,
        signal_handler: Option<Arc<dyn SignalHandlerTrait>>,
    ) -> Self {
        Self {
            net_worth_service,
            spending_service,
            cashflow_service,
            budget_service,
            goal_service,
            classification_service,
            health_service,
            signal_handler,
        }
    }

    /// Builds a service wired with the default implementations and no
    /// signal handler.
    pub fn with_defaults() -> Self {
        let net_worth_service = Arc::new(NetWorthService::new());
        Self::new(
            net_worth_service.clone(),
            Arc::new(SpendingService::new()),
            Arc::new(CashFlowService::new()),
            Arc::new(BudgetService::new()),
            Arc::new(GoalService::new()),
            Arc::new(ClassificationService::new()),
            Arc::new(HealthService::new(net_worth_service)),
            None,
        )
    }

    /// Installs a notification collaborator.
    pub fn with_signal_handler(mut self, handler: Arc<dyn SignalHandlerTrait>) -> Self {
        self.signal_handler = Some(handler);
        self
    }

    /// Collects dangling-reference warnings without altering any result.
    fn collect_warnings(input: &DashboardInput) -> Vec<EngineWarning> {
        let account_ids: HashSet<&str> = input.accounts.iter().map(|a| a.id.as_str()).collect();
        let snapshot_ids: HashSet<&str> = input.snapshots.iter().map(|s| s.id.as_str()).collect();

        let mut warnings = Vec::new();

        for tx in &input.transactions {
            if !account_ids.contains(tx.account_id.as_str()) {
                warn!(
                    "Transaction {} references unknown account {}",
                    tx.id, tx.account_id
                );
                warnings.push(EngineWarning {
                    kind: WarningKind::UnresolvedAccount,
                    entity_id: tx.id.clone(),
                    message: format!(
                        "transaction {} references unknown account {}",
                        tx.id, tx.account_id
                    ),
                });
            }
        }

        for (index, holding) in input.holdings.iter().enumerate() {
            if !snapshot_ids.contains(holding.portfolio_id.as_str()) {
                warn!(
                    "Holding #{} references unknown snapshot {}",
                    index, holding.portfolio_id
                );
                warnings.push(EngineWarning {
                    kind: WarningKind::UnresolvedSnapshot,
                    entity_id: holding.portfolio_id.clone(),
                    message: format!(
                        "holding #{} references unknown snapshot {}",
                        index, holding.portfolio_id
                    ),
                });
            }
        }

        warnings
    }

    /// Emits threshold signals to the installed handler, if any. Handler
    /// failures are logged and swallowed.
    fn emit_signals(&self, budgets: &[BudgetStatus], goals: &[GoalStatus]) {
        let handler = match &self.signal_handler {
            Some(handler) => handler,
            None => return,
        };

        let mut signals: Vec<ThresholdSignal> = Vec::new();
        for status in budgets.iter().filter(|b| b.is_over_budget) {
            signals.push(ThresholdSignal::BudgetOverThreshold {
                budget_id: status.budget_id.clone(),
                utilization_pct: status.utilization_pct,
            });
        }
        for status in goals.iter().filter(|g| g.completion_pct >= Decimal::ONE_HUNDRED) {
            signals.push(ThresholdSignal::GoalReached {
                goal_id: status.goal_id.clone(),
                completion_pct: status.completion_pct,
            });
        }

        for signal in &signals {
            if let Err(e) = handler.handle(signal) {
                warn!("Signal handler failed for {:?}: {}", signal, e);
            }
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn summarize(&self, input: &DashboardInput) -> Result<DashboardSummary> {
        debug!(
            "Evaluating dashboard snapshot: {} accounts, {} transactions, {} budgets, {} goals, {} snapshots, {} holdings",
            input.accounts.len(),
            input.transactions.len(),
            input.budgets.len(),
            input.goals.len(),
            input.snapshots.len(),
            input.holdings.len()
        );

        let warnings = Self::collect_warnings(input);

        let net_worth = self.net_worth_service.summarize(&input.accounts)?;
        let spending = self.spending_service.spend_by_category(&input.transactions)?;
        let cash_flow = self
            .cashflow_service
            .weekly_buckets(&input.transactions, DEFAULT_CASH_FLOW_WEEKS)?;
        let budgets = self.budget_service.evaluate_all(&input.budgets)?;
        let goals = self.goal_service.status_all(&input.goals, input.as_of)?;
        let private_equity = self
            .classification_service
            .classification_by_account(&input.snapshots, &input.holdings)?;
        let health = self.health_service.score(&input.accounts, &input.goals)?;

        self.emit_signals(&budgets, &goals);

        Ok(DashboardSummary {
            net_worth,
            spending,
            cash_flow,
            budgets,
            goals,
            private_equity,
            health,
            warnings,
        })
    }
}
