use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total spend for one category over the supplied transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category: String,
    /// Sum of expense magnitudes for the category
    pub amount: Decimal,
    pub transaction_count: i32,
}
