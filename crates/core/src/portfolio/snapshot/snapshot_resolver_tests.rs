//! Unit tests for latest-snapshot resolution.

use super::*;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ts(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
}

fn snapshot(
    id: &str,
    key: &str,
    as_of_date: Option<NaiveDate>,
    created_at: NaiveDateTime,
) -> PortfolioSnapshot {
    PortfolioSnapshot {
        id: id.to_string(),
        account_number: key.to_string(),
        as_of_date,
        created_at,
        private_equity_value: dec!(0),
    }
}

#[test]
fn dated_snapshot_beats_undated_despite_earlier_creation() {
    // The undated snapshot was created later, but a statement date outranks
    // creation time.
    let snapshots = vec![
        snapshot("undated", "ACC1", None, ts(2024, 3, 1, 12)),
        snapshot("dated", "ACC1", Some(date(2024, 1, 1)), ts(2024, 2, 1, 12)),
    ];

    let resolved = resolve_current(&snapshots);

    assert_eq!(resolved["ACC1"].id, "dated");
}

#[test]
fn later_as_of_date_wins() {
    let snapshots = vec![
        snapshot("jan", "ACC1", Some(date(2024, 1, 31)), ts(2024, 2, 1, 9)),
        snapshot("feb", "ACC1", Some(date(2024, 2, 29)), ts(2024, 1, 15, 9)),
    ];

    let resolved = resolve_current(&snapshots);

    assert_eq!(resolved["ACC1"].id, "feb");
}

#[test]
fn equal_dates_fall_back_to_created_at() {
    let snapshots = vec![
        snapshot("first", "ACC1", Some(date(2024, 1, 31)), ts(2024, 2, 1, 9)),
        snapshot("reupload", "ACC1", Some(date(2024, 1, 31)), ts(2024, 2, 1, 17)),
    ];

    let resolved = resolve_current(&snapshots);

    assert_eq!(resolved["ACC1"].id, "reupload");
}

#[test]
fn both_undated_fall_back_to_created_at() {
    let snapshots = vec![
        snapshot("b", "ACC1", None, ts(2024, 6, 1, 9)),
        snapshot("a", "ACC1", None, ts(2024, 1, 1, 9)),
    ];

    let resolved = resolve_current(&snapshots);

    assert_eq!(resolved["ACC1"].id, "b");
}

#[test]
fn keys_resolve_independently() {
    let snapshots = vec![
        snapshot("a1", "ACC1", Some(date(2024, 1, 1)), ts(2024, 1, 2, 9)),
        snapshot("b1", "ACC2", None, ts(2024, 1, 2, 9)),
        snapshot("a2", "ACC1", Some(date(2024, 2, 1)), ts(2024, 1, 2, 10)),
    ];

    let resolved = resolve_current(&snapshots);

    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved["ACC1"].id, "a2");
    assert_eq!(resolved["ACC2"].id, "b1");
}

#[test]
fn inserting_an_older_snapshot_never_moves_the_pick_backwards() {
    let mut snapshots = vec![
        snapshot("current", "ACC1", Some(date(2024, 3, 31)), ts(2024, 4, 1, 9)),
    ];
    let before = resolve_current(&snapshots);

    snapshots.push(snapshot("stale", "ACC1", Some(date(2023, 12, 31)), ts(2024, 5, 1, 9)));
    let after = resolve_current(&snapshots);

    assert_eq!(before["ACC1"].id, after["ACC1"].id);
}

#[test]
fn resolution_is_order_independent() {
    let a = snapshot("a", "ACC1", None, ts(2024, 1, 1, 9));
    let b = snapshot("b", "ACC1", Some(date(2024, 1, 1)), ts(2024, 1, 2, 9));
    let c = snapshot("c", "ACC1", Some(date(2024, 1, 1)), ts(2024, 1, 3, 9));
    let d = snapshot("d", "ACC1", Some(date(2023, 6, 30)), ts(2024, 1, 4, 9));

    let forward = resolve_current(&[a.clone(), b.clone(), c.clone(), d.clone()]);
    let reverse = resolve_current(&[d, c, b, a]);

    assert_eq!(forward["ACC1"].id, "c");
    assert_eq!(forward["ACC1"], reverse["ACC1"]);
}

#[test]
fn empty_input_resolves_to_empty_map() {
    assert!(resolve_current(&[]).is_empty());
}
