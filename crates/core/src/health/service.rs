//! Health scoring service implementation.

use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::model::{HealthReport, HealthScore, OverallBand, ScoreBand, Subscore};
use super::traits::HealthServiceTrait;
use crate::accounts::{Account, AccountType};
use crate::constants::{
    DEBT_SCORE_MAX, DIVERSIFICATION_SCORE_MAX, EMERGENCY_GOAL_KEYWORD, EMERGENCY_SCORE_MAX,
    HEALTH_SCORE_MAX, SAVINGS_SCORE_MAX,
};
use crate::errors::Result;
use crate::goals::Goal;
use crate::net_worth::NetWorthServiceTrait;
use crate::utils::numeric_utils::{clamped_score, percent_of};

// Band thresholds (inclusive lower bounds) per factor.
const SAVINGS_GOOD_MIN: i32 = 20;
const SAVINGS_MODERATE_MIN: i32 = 10;
const DEBT_GOOD_MIN: i32 = 18;
const DEBT_MODERATE_MIN: i32 = 10;
const EMERGENCY_GOOD_MIN: i32 = 18;
const EMERGENCY_MODERATE_MIN: i32 = 10;
const DIVERSIFICATION_GOOD_MIN: i32 = 14;
const DIVERSIFICATION_MODERATE_MIN: i32 = 8;

// Composite band thresholds.
const OVERALL_GOOD_MIN: i32 = 70;
const OVERALL_FAIR_MIN: i32 = 50;

/// Fallback emergency-fund progress when no emergency goal exists but some
/// savings balance does.
const EMERGENCY_FALLBACK_PROGRESS: Decimal = dec!(50);

/// Service computing the composite financial-health score.
pub struct HealthService {
    net_worth_service: Arc<dyn NetWorthServiceTrait>,
}

impl HealthService {
    pub fn new(net_worth_service: Arc<dyn NetWorthServiceTrait>) -> Self {
        Self { net_worth_service }
    }

    /// Sum of positive balances of active accounts of the given type.
    fn positive_balance_of_type(accounts: &[Account], account_type: AccountType) -> Decimal {
        accounts
            .iter()
            .filter(|a| a.is_active && a.account_type == account_type && a.is_asset())
            .map(|a| a.balance)
            .sum()
    }

    fn savings_subscore(savings_balance: Decimal, total_assets: Decimal) -> Subscore {
        let ratio = percent_of(savings_balance, total_assets);
        let score = clamped_score(ratio, SAVINGS_SCORE_MAX);
        Subscore {
            label: "Savings".to_string(),
            score,
            max: SAVINGS_SCORE_MAX,
            band: ScoreBand::from_thresholds(score, SAVINGS_GOOD_MIN, SAVINGS_MODERATE_MIN),
        }
    }

    fn debt_subscore(total_liabilities: Decimal, total_assets: Decimal) -> Subscore {
        let ratio = percent_of(total_liabilities, total_assets);
        let score = clamped_score(dec!(25) - ratio / dec!(4), DEBT_SCORE_MAX);
        Subscore {
            label: "Debt".to_string(),
            score,
            max: DEBT_SCORE_MAX,
            band: ScoreBand::from_thresholds(score, DEBT_GOOD_MIN, DEBT_MODERATE_MIN),
        }
    }

    fn emergency_subscore(goals: &[Goal], savings_balance: Decimal) -> Subscore {
        let emergency_goal = goals
            .iter()
            .find(|g| g.name.to_lowercase().contains(EMERGENCY_GOAL_KEYWORD));

        let progress = match emergency_goal {
            Some(goal) => percent_of(goal.current_amount, goal.target_amount),
            None if savings_balance > Decimal::ZERO => EMERGENCY_FALLBACK_PROGRESS,
            None => Decimal::ZERO,
        };

        let score = clamped_score(progress * dec!(0.25), EMERGENCY_SCORE_MAX);
        Subscore {
            label: "Emergency Fund".to_string(),
            score,
            max: EMERGENCY_SCORE_MAX,
            band: ScoreBand::from_thresholds(score, EMERGENCY_GOOD_MIN, EMERGENCY_MODERATE_MIN),
        }
    }

    fn diversification_subscore(investment_balance: Decimal, total_assets: Decimal) -> Subscore {
        let ratio = percent_of(investment_balance, total_assets);
        let score = clamped_score(ratio * dec!(20) / dec!(30), DIVERSIFICATION_SCORE_MAX);
        Subscore {
            label: "Investment Diversification".to_string(),
            score,
            max: DIVERSIFICATION_SCORE_MAX,
            band: ScoreBand::from_thresholds(
                score,
                DIVERSIFICATION_GOOD_MIN,
                DIVERSIFICATION_MODERATE_MIN,
            ),
        }
    }
}

impl HealthServiceTrait for HealthService {
    fn score(&self, accounts: &[Account], goals: &[Goal]) -> Result<HealthReport> {
        if !accounts.iter().any(|a| a.is_active) {
            debug!("No active accounts supplied. Health score has no data.");
            return Ok(HealthReport::NoData);
        }

        let totals = self.net_worth_service.summarize(accounts)?;
        let savings_balance = Self::positive_balance_of_type(accounts, AccountType::Savings);
        let investment_balance = Self::positive_balance_of_type(accounts, AccountType::Investment);

        let subscores = vec![
            Self::savings_subscore(savings_balance, totals.total_assets),
            Self::debt_subscore(totals.total_liabilities, totals.total_assets),
            Self::emergency_subscore(goals, savings_balance),
            Self::diversification_subscore(investment_balance, totals.total_assets),
        ];

        let total: i32 = subscores.iter().map(|s| s.score).sum();
        let band = if total >= OVERALL_GOOD_MIN {
            OverallBand::GoodStanding
        } else if total >= OVERALL_FAIR_MIN {
            OverallBand::Fair
        } else {
            OverallBand::NeedsImprovement
        };

        debug!("Health score computed: total={} band={:?}", total, band);

        Ok(HealthReport::Scored(HealthScore {
            total,
            max: HEALTH_SCORE_MAX,
            band,
            subscores,
        }))
    }
}
