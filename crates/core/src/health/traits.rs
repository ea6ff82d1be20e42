//! Health service traits.

use super::model::HealthReport;
use crate::accounts::Account;
use crate::errors::Result;
use crate::goals::Goal;

/// Trait defining the contract for health scoring.
pub trait HealthServiceTrait: Send + Sync {
    /// Compute the composite health score over the user's active accounts
    /// and goals.
    ///
    /// Returns `HealthReport::NoData` when no active accounts exist,
    /// never a zero score for absent input.
    fn score(&self, accounts: &[Account], goals: &[Goal]) -> Result<HealthReport>;
}
