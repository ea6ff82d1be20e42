//! Weekly cash-flow bucketing service implementation.

use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;

use super::cashflow_model::CashFlowBucket;
use super::cashflow_traits::CashFlowServiceTrait;
use crate::errors::Result;
use crate::transactions::{Transaction, TransactionKind};
use crate::utils::time_utils::{short_label, week_start};

#[derive(Debug, Default)]
struct WeekTotals {
    income: Decimal,
    expenses: Decimal,
}

/// Service grouping transactions into weekly cash-flow buckets.
#[derive(Debug, Default)]
pub struct CashFlowService;

impl CashFlowService {
    pub fn new() -> Self {
        Self
    }
}

impl CashFlowServiceTrait for CashFlowService {
    fn weekly_buckets(
        &self,
        transactions: &[Transaction],
        max_weeks: usize,
    ) -> Result<Vec<CashFlowBucket>> {
        // BTreeMap keyed by week-start date keeps buckets sorted and
        // collision-free even when two weeks share a formatted label.
        let mut weeks: BTreeMap<chrono::NaiveDate, WeekTotals> = BTreeMap::new();

        for tx in transactions {
            let bucket = weeks.entry(week_start(tx.date)).or_default();
            match tx.kind {
                TransactionKind::Income => {
                    if tx.amount > Decimal::ZERO {
                        bucket.income += tx.amount;
                    }
                }
                TransactionKind::Expense => {
                    bucket.expenses += tx.amount.abs();
                }
                TransactionKind::Transfer => {}
            }
        }

        let skip = weeks.len().saturating_sub(max_weeks);
        let buckets: Vec<CashFlowBucket> = weeks
            .into_iter()
            .skip(skip)
            .map(|(period_start, totals)| CashFlowBucket {
                period_start,
                label: short_label(period_start),
                income: totals.income,
                expenses: totals.expenses,
            })
            .collect();

        debug!(
            "Cash flow bucketing complete: {} buckets (max {})",
            buckets.len(),
            max_weeks
        );

        Ok(buckets)
    }
}
