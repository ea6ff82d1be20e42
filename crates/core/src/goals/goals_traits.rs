//! Goal service traits.

use chrono::NaiveDate;

use super::goals_model::{Goal, GoalStatus};
use crate::errors::Result;

/// Trait defining the contract for goal tracking.
pub trait GoalServiceTrait: Send + Sync {
    /// Evaluate one goal's completion percentage and countdown as of `today`.
    fn status(&self, goal: &Goal, today: NaiveDate) -> Result<GoalStatus>;

    /// Evaluate every goal, preserving input order.
    fn status_all(&self, goals: &[Goal], today: NaiveDate) -> Result<Vec<GoalStatus>>;
}
