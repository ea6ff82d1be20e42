use chrono::{Datelike, Duration, NaiveDate};

/// Returns the start of the calendar week containing `date`.
///
/// Weeks start on Sunday, matching the dashboard's cash-flow chart. This is
/// the canonical bucket key for weekly aggregation; the formatted label is
/// presentation only and must never be used as a key.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

/// Formats a date as a short month/day label, e.g. "Jan 5".
pub fn short_label(date: NaiveDate) -> String {
    format!("{} {}", month_abbrev(date.month()), date.day())
}

/// Whole days from `today` until `deadline`. Negative when the deadline
/// has passed, zero when it is today.
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}
