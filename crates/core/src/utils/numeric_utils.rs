//! Safe numeric helpers used by every aggregation and scoring service.
//!
//! All ratios in the engine go through [`safe_div`], which resolves any
//! non-positive denominator to zero instead of producing an error. This is
//! the single guard that keeps utilization, completion and scoring math
//! total over arbitrary input.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Division that resolves a non-positive denominator to zero.
///
/// `safe_div(n, d) = n / d` when `d > 0`, otherwise `Decimal::ZERO`.
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator / denominator
    } else {
        Decimal::ZERO
    }
}

/// Percentage helper: `safe_div(part, whole) * 100`.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    safe_div(part, whole) * Decimal::ONE_HUNDRED
}

/// Rounds to a whole number, midpoint away from zero.
///
/// Matches the rounding the dashboard presentation layer applies
/// (as opposed to `Decimal::round`, which rounds midpoints to even).
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a value to a whole number and clamps it to `[0, max]`.
///
/// Used for health sub-scores, which are integer points with a fixed
/// ceiling. Clamping happens in `Decimal` space so values beyond the
/// `i32` range still land on the ceiling rather than failing conversion.
pub fn clamped_score(value: Decimal, max: i32) -> i32 {
    round_whole(value)
        .clamp(Decimal::ZERO, Decimal::from(max))
        .to_i32()
        .unwrap_or(max)
}
