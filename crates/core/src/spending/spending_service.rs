use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use super::spending_model::CategorySpending;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::transactions::{Transaction, TransactionKind};

/// Trait defining the contract for the spending service
pub trait SpendingServiceTrait: Send + Sync {
    /// Sum expense magnitudes per category, ordered by descending amount.
    ///
    /// Only `Expense` transactions participate; transfers and income are
    /// ignored. Callers may truncate the result to a top-N view.
    fn spend_by_category(&self, transactions: &[Transaction]) -> Result<Vec<CategorySpending>>;
}

#[derive(Debug, Default)]
pub struct SpendingService;

impl SpendingService {
    pub fn new() -> Self {
        Self
    }
}

impl SpendingServiceTrait for SpendingService {
    fn spend_by_category(&self, transactions: &[Transaction]) -> Result<Vec<CategorySpending>> {
        debug!("Aggregating spending for {} transactions", transactions.len());

        let mut by_category: HashMap<String, CategorySpending> = HashMap::new();

        for tx in transactions {
            if tx.kind != TransactionKind::Expense {
                continue;
            }

            let entry = by_category
                .entry(tx.category.clone())
                .or_insert_with(|| CategorySpending {
                    category: tx.category.clone(),
                    amount: Decimal::ZERO,
                    transaction_count: 0,
                });
            entry.amount += tx.amount.abs();
            entry.transaction_count += 1;
        }

        let mut spending: Vec<CategorySpending> = by_category
            .into_values()
            .map(|mut entry| {
                entry.amount = entry.amount.round_dp(DISPLAY_DECIMAL_PRECISION);
                entry
            })
            .collect();

        spending.sort_by(|a, b| b.amount.cmp(&a.amount));

        Ok(spending)
    }
}
