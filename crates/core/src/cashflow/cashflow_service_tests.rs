//! Unit tests for the cash flow service.

use super::*;
use crate::transactions::{Transaction, TransactionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tx(id: &str, day: NaiveDate, amount: Decimal, kind: TransactionKind) -> Transaction {
    Transaction {
        id: id.to_string(),
        account_id: "acc-1".to_string(),
        date: day,
        amount,
        kind,
        category: "general".to_string(),
    }
}

#[test]
fn buckets_by_sunday_week_start() {
    // 2024-01-08 (Mon) and 2024-01-10 (Wed) share the week starting Sunday 2024-01-07;
    // 2024-01-14 (Sun) opens the next week.
    let transactions = vec![
        tx("1", date(2024, 1, 8), dec!(1000), TransactionKind::Income),
        tx("2", date(2024, 1, 10), dec!(-200), TransactionKind::Expense),
        tx("3", date(2024, 1, 14), dec!(-75), TransactionKind::Expense),
    ];

    let buckets = CashFlowService::new().weekly_buckets(&transactions, 7).unwrap();

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].period_start, date(2024, 1, 7));
    assert_eq!(buckets[0].label, "Jan 7");
    assert_eq!(buckets[0].income, dec!(1000));
    assert_eq!(buckets[0].expenses, dec!(200));
    assert_eq!(buckets[1].period_start, date(2024, 1, 14));
    assert_eq!(buckets[1].expenses, dec!(75));
}

#[test]
fn same_label_different_years_stay_distinct() {
    // Both weeks start on a "Jan 5", one year apart. The underlying date
    // keys keep them separate even though the labels collide.
    let transactions = vec![
        tx("1", date(2020, 1, 5), dec!(-10), TransactionKind::Expense),
        tx("2", date(2025, 1, 5), dec!(-20), TransactionKind::Expense),
    ];

    let buckets = CashFlowService::new().weekly_buckets(&transactions, 7).unwrap();

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].label, buckets[1].label);
    assert_eq!(buckets[0].expenses, dec!(10));
    assert_eq!(buckets[1].expenses, dec!(20));
}

#[test]
fn retains_only_most_recent_weeks_ascending() {
    // Nine consecutive weeks of activity; only the last seven survive.
    let mut transactions = Vec::new();
    for week in 0..9 {
        let day = date(2024, 3, 3) + chrono::Duration::weeks(week);
        transactions.push(tx(&format!("t{}", week), day, dec!(-1), TransactionKind::Expense));
    }

    let buckets = CashFlowService::new().weekly_buckets(&transactions, 7).unwrap();

    assert_eq!(buckets.len(), 7);
    assert_eq!(buckets[0].period_start, date(2024, 3, 17));
    assert!(buckets.windows(2).all(|w| w[0].period_start < w[1].period_start));
}

#[test]
fn transfers_and_negative_income_are_excluded() {
    let transactions = vec![
        tx("1", date(2024, 1, 8), dec!(-300), TransactionKind::Transfer),
        tx("2", date(2024, 1, 8), dec!(-50), TransactionKind::Income),
        tx("3", date(2024, 1, 8), dec!(100), TransactionKind::Income),
    ];

    let buckets = CashFlowService::new().weekly_buckets(&transactions, 7).unwrap();

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].income, dec!(100));
    assert_eq!(buckets[0].expenses, Decimal::ZERO);
}
