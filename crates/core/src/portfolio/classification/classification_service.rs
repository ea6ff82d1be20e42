//! Classification aggregation service implementation.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use super::classification_model::ClassificationSummary;
use crate::errors::Result;
use crate::portfolio::snapshot::{resolve_current, Holding, PortfolioSnapshot};
use crate::utils::numeric_utils::round_whole;

/// Trait defining the contract for classification aggregation.
pub trait ClassificationServiceTrait: Send + Sync {
    /// Sum classified holdings per account, scoped to each account's
    /// resolved current snapshot.
    ///
    /// Holdings attached to superseded snapshots are ignored; holdings with
    /// no classification or the "none" sentinel are ignored. Each holding's
    /// market value is rounded to a whole amount before summing.
    fn classification_by_account(
        &self,
        snapshots: &[PortfolioSnapshot],
        holdings: &[Holding],
    ) -> Result<HashMap<String, ClassificationSummary>>;
}

/// Service computing classification sums against resolved snapshots.
#[derive(Debug, Default)]
pub struct ClassificationService;

impl ClassificationService {
    pub fn new() -> Self {
        Self
    }
}

impl ClassificationServiceTrait for ClassificationService {
    fn classification_by_account(
        &self,
        snapshots: &[PortfolioSnapshot],
        holdings: &[Holding],
    ) -> Result<HashMap<String, ClassificationSummary>> {
        let resolved = resolve_current(snapshots);

        let mut holdings_by_portfolio: HashMap<&str, Vec<&Holding>> = HashMap::new();
        for holding in holdings {
            holdings_by_portfolio
                .entry(holding.portfolio_id.as_str())
                .or_default()
                .push(holding);
        }

        let mut by_account = HashMap::with_capacity(resolved.len());
        for (account_number, snapshot) in resolved {
            let calculated_value = holdings_by_portfolio
                .get(snapshot.id.as_str())
                .map(|items| {
                    items
                        .iter()
                        .filter(|h| h.is_classified())
                        .map(|h| round_whole(h.market_value))
                        .sum()
                })
                .unwrap_or(Decimal::ZERO);

            by_account.insert(
                account_number,
                ClassificationSummary {
                    resolved_snapshot_id: snapshot.id,
                    calculated_value,
                    stored_value: snapshot.private_equity_value,
                },
            );
        }

        debug!("Classification sums computed for {} accounts", by_account.len());

        Ok(by_account)
    }
}
