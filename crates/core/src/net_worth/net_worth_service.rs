//! Net worth aggregation service implementation.

use log::debug;
use rust_decimal::Decimal;

use super::net_worth_model::NetWorthSummary;
use super::net_worth_traits::NetWorthServiceTrait;
use crate::accounts::Account;
use crate::errors::Result;

/// Service for aggregating account balances into a balance sheet.
#[derive(Debug, Default)]
pub struct NetWorthService;

impl NetWorthService {
    pub fn new() -> Self {
        Self
    }
}

impl NetWorthServiceTrait for NetWorthService {
    fn summarize(&self, accounts: &[Account]) -> Result<NetWorthSummary> {
        if accounts.is_empty() {
            debug!("No accounts supplied. Returning empty net worth summary.");
            return Ok(NetWorthSummary::empty());
        }

        let mut total_assets = Decimal::ZERO;
        let mut total_liabilities = Decimal::ZERO;

        for account in accounts.iter().filter(|a| a.is_active) {
            if account.balance > Decimal::ZERO {
                total_assets += account.balance;
            } else if account.balance < Decimal::ZERO {
                total_liabilities += account.balance.abs();
            }
        }

        let net_worth = total_assets - total_liabilities;

        debug!(
            "Net worth aggregation complete: assets={}, liabilities={}, net_worth={}",
            total_assets, total_liabilities, net_worth
        );

        Ok(NetWorthSummary {
            total_assets,
            total_liabilities,
            net_worth,
        })
    }
}
