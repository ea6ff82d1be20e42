//! Unit tests for the net worth service.

use super::*;
use crate::accounts::{Account, AccountType};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn account(id: &str, balance: Decimal, account_type: AccountType, active: bool) -> Account {
    Account {
        id: id.to_string(),
        name: format!("Account {}", id),
        account_type,
        balance,
        currency: "USD".to_string(),
        is_active: active,
    }
}

#[test]
fn aggregates_assets_and_liabilities() {
    let accounts = vec![
        account("1", dec!(245780.50), AccountType::Bank, true),
        account("2", dec!(1850000), AccountType::Savings, true),
        account("3", dec!(-45000), AccountType::CreditCard, true),
    ];

    let summary = NetWorthService::new().summarize(&accounts).unwrap();

    assert_eq!(summary.total_assets, dec!(2095780.50));
    assert_eq!(summary.total_liabilities, dec!(45000));
    assert_eq!(summary.net_worth, dec!(2050780.50));
}

#[test]
fn empty_input_returns_zeroes() {
    let summary = NetWorthService::new().summarize(&[]).unwrap();
    assert_eq!(summary, NetWorthSummary::empty());
    assert_eq!(summary.net_worth, Decimal::ZERO);
}

#[test]
fn inactive_accounts_are_excluded() {
    let accounts = vec![
        account("1", dec!(1000), AccountType::Bank, true),
        account("2", dec!(9999), AccountType::Savings, false),
        account("3", dec!(-500), AccountType::Loan, false),
    ];

    let summary = NetWorthService::new().summarize(&accounts).unwrap();

    assert_eq!(summary.total_assets, dec!(1000));
    assert_eq!(summary.total_liabilities, Decimal::ZERO);
    assert_eq!(summary.net_worth, dec!(1000));
}

#[test]
fn zero_balances_count_as_neither() {
    let accounts = vec![account("1", Decimal::ZERO, AccountType::Bank, true)];
    let summary = NetWorthService::new().summarize(&accounts).unwrap();
    assert_eq!(summary, NetWorthSummary::empty());
}

#[test]
fn identity_holds_with_only_liabilities() {
    let accounts = vec![account("1", dec!(-1200), AccountType::Loan, true)];
    let summary = NetWorthService::new().summarize(&accounts).unwrap();
    assert_eq!(summary.total_assets, Decimal::ZERO);
    assert_eq!(summary.total_liabilities, dec!(1200));
    assert_eq!(summary.net_worth, dec!(-1200));
}
