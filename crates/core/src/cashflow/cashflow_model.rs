//! Cash flow domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income and expenses for one calendar week.
///
/// `period_start` (the Sunday opening the week) is the bucket identity;
/// `label` is derived from it for chart axes and must not be used as a
/// key, since two different weeks can share a label across years.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowBucket {
    pub period_start: NaiveDate,
    /// Short display label, e.g. "Jan 5"
    pub label: String,
    /// Sum of positive income amounts in the week
    pub income: Decimal,
    /// Sum of expense magnitudes in the week
    pub expenses: Decimal,
}
