//! Classification domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification total for one account's resolved current snapshot.
///
/// `calculated_value` is recomputed from the snapshot's holdings;
/// `stored_value` is whatever the reconciliation job last wrote to the
/// snapshot itself. The engine reports both so callers can display drift;
/// it never writes the stored value back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationSummary {
    pub resolved_snapshot_id: String,
    /// Sum of rounded market values over classified holdings
    pub calculated_value: Decimal,
    /// The snapshot's own stored classification total
    pub stored_value: Decimal,
}
