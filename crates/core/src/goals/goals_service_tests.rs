//! Unit tests for the goal service.

use super::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn goal(id: &str, target: Decimal, current: Decimal, deadline: Option<NaiveDate>) -> Goal {
    Goal {
        id: id.to_string(),
        name: "House deposit".to_string(),
        target_amount: target,
        current_amount: current,
        deadline,
    }
}

#[test]
fn completion_percentage() {
    let status = GoalService::new()
        .status(&goal("g1", dec!(500000), dec!(325000), None), date(2024, 6, 1))
        .unwrap();

    assert_eq!(status.completion_pct, dec!(65));
    assert_eq!(status.days_remaining, None);
}

#[test]
fn completion_may_exceed_one_hundred() {
    let status = GoalService::new()
        .status(&goal("g1", dec!(1000), dec!(1250), None), date(2024, 6, 1))
        .unwrap();

    assert_eq!(status.completion_pct, dec!(125));
}

#[test]
fn zero_target_degrades_to_zero_completion() {
    let status = GoalService::new()
        .status(&goal("g1", Decimal::ZERO, dec!(100), None), date(2024, 6, 1))
        .unwrap();

    assert_eq!(status.completion_pct, Decimal::ZERO);
}

#[test]
fn days_remaining_counts_whole_days() {
    let service = GoalService::new();
    let today = date(2024, 6, 1);

    let ahead = service
        .status(&goal("g1", dec!(100), dec!(10), Some(date(2024, 6, 15))), today)
        .unwrap();
    assert_eq!(ahead.days_remaining, Some(14));

    let due_today = service
        .status(&goal("g2", dec!(100), dec!(10), Some(today)), today)
        .unwrap();
    assert_eq!(due_today.days_remaining, Some(0));

    let passed = service
        .status(&goal("g3", dec!(100), dec!(10), Some(date(2024, 5, 20))), today)
        .unwrap();
    assert_eq!(passed.days_remaining, Some(-12));
}

#[test]
fn status_all_preserves_order() {
    let goals = vec![
        goal("g1", dec!(100), dec!(50), None),
        goal("g2", dec!(200), dec!(50), None),
    ];

    let statuses = GoalService::new().status_all(&goals, date(2024, 6, 1)).unwrap();

    assert_eq!(statuses[0].goal_id, "g1");
    assert_eq!(statuses[0].completion_pct, dec!(50));
    assert_eq!(statuses[1].goal_id, "g2");
    assert_eq!(statuses[1].completion_pct, dec!(25));
}
