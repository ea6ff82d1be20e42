//! Unit tests for the spending service.

use super::*;
use crate::transactions::{Transaction, TransactionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn tx(id: &str, amount: Decimal, kind: TransactionKind, category: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        account_id: "acc-1".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        amount,
        kind,
        category: category.to_string(),
    }
}

#[test]
fn groups_expenses_by_category_descending() {
    let transactions = vec![
        tx("1", dec!(-120), TransactionKind::Expense, "groceries"),
        tx("2", dec!(-80), TransactionKind::Expense, "groceries"),
        tx("3", dec!(-500), TransactionKind::Expense, "rent"),
        tx("4", dec!(-30), TransactionKind::Expense, "transport"),
    ];

    let spending = SpendingService::new().spend_by_category(&transactions).unwrap();

    let categories: Vec<&str> = spending.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(categories, vec!["rent", "groceries", "transport"]);
    assert_eq!(spending[1].amount, dec!(200));
    assert_eq!(spending[1].transaction_count, 2);
}

#[test]
fn income_and_transfers_are_ignored() {
    let transactions = vec![
        tx("1", dec!(5000), TransactionKind::Income, "salary"),
        tx("2", dec!(-200), TransactionKind::Transfer, "savings"),
        tx("3", dec!(-50), TransactionKind::Expense, "coffee"),
    ];

    let spending = SpendingService::new().spend_by_category(&transactions).unwrap();

    assert_eq!(spending.len(), 1);
    assert_eq!(spending[0].category, "coffee");
    assert_eq!(spending[0].amount, dec!(50));
}

#[test]
fn expense_magnitude_is_used_regardless_of_sign() {
    // Some feeds store expenses as positive amounts; only the magnitude counts.
    let transactions = vec![
        tx("1", dec!(75), TransactionKind::Expense, "dining"),
        tx("2", dec!(-25), TransactionKind::Expense, "dining"),
    ];

    let spending = SpendingService::new().spend_by_category(&transactions).unwrap();

    assert_eq!(spending[0].amount, dec!(100));
}

#[test]
fn empty_input_yields_empty_result() {
    let spending = SpendingService::new().spend_by_category(&[]).unwrap();
    assert!(spending.is_empty());
}
