//! Latest-snapshot resolution.
//!
//! Repeated uploads for one external account leave several snapshots
//! sharing an `account_number`. Exactly one of them is "current", and the
//! choice must come out the same regardless of the order the record store
//! returns rows in. The precedence rule is a business rule observed in
//! production, not an inference:
//!
//! 1. a snapshot with an `as_of_date` outranks one without;
//! 2. between dated snapshots, the strictly later `as_of_date` wins;
//! 3. on equal `as_of_date` (including both absent), the strictly later
//!    `created_at` wins;
//! 4. otherwise the incumbent (first seen) is kept.
//!
//! Because challengers only win on a strict comparison, a key that has
//! been resolved never moves backwards when an older snapshot is inserted
//! later.

use std::collections::HashMap;

use log::debug;

use super::snapshot_model::PortfolioSnapshot;

/// True when `challenger` outranks `incumbent` under the precedence rule.
pub fn is_more_current(challenger: &PortfolioSnapshot, incumbent: &PortfolioSnapshot) -> bool {
    match (challenger.as_of_date, incumbent.as_of_date) {
        // Presence of a statement date outranks absence.
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => challenger.created_at > incumbent.created_at,
        (Some(challenger_date), Some(incumbent_date)) => {
            challenger_date > incumbent_date
                || (challenger_date == incumbent_date
                    && challenger.created_at > incumbent.created_at)
        }
    }
}

/// Picks the current snapshot for every distinct account number.
///
/// Idempotent and order-independent: permuting `snapshots` yields the same
/// mapping (assuming `created_at` values are distinct within a key, which
/// the record store guarantees for inserted rows).
pub fn resolve_current(snapshots: &[PortfolioSnapshot]) -> HashMap<String, PortfolioSnapshot> {
    let mut current: HashMap<String, &PortfolioSnapshot> = HashMap::new();

    for snapshot in snapshots {
        match current.get(snapshot.account_number.as_str()) {
            Some(incumbent) => {
                if is_more_current(snapshot, incumbent) {
                    current.insert(snapshot.account_number.clone(), snapshot);
                }
            }
            None => {
                current.insert(snapshot.account_number.clone(), snapshot);
            }
        }
    }

    debug!(
        "Resolved {} current snapshots from {} candidates",
        current.len(),
        snapshots.len()
    );

    current
        .into_iter()
        .map(|(key, snapshot)| (key, snapshot.clone()))
        .collect()
}
