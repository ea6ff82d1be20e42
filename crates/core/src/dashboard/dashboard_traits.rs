//! Dashboard service traits.

use super::dashboard_model::{DashboardInput, DashboardSummary};
use crate::errors::Result;

/// Trait defining the contract for full-snapshot evaluation.
pub trait DashboardServiceTrait: Send + Sync {
    /// Evaluate every dashboard figure over one consistent snapshot.
    ///
    /// Pure over the input: no state survives between calls. Dangling
    /// references degrade to warnings on the result, never to errors.
    fn summarize(&self, input: &DashboardInput) -> Result<DashboardSummary>;
}
