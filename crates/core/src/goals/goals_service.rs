//! Goal tracking service implementation.

use chrono::NaiveDate;
use log::debug;

use super::goals_model::{Goal, GoalStatus};
use super::goals_traits::GoalServiceTrait;
use crate::errors::Result;
use crate::utils::numeric_utils::percent_of;
use crate::utils::time_utils::days_until;

/// Service tracking goal completion.
#[derive(Debug, Default)]
pub struct GoalService;

impl GoalService {
    pub fn new() -> Self {
        Self
    }
}

impl GoalServiceTrait for GoalService {
    fn status(&self, goal: &Goal, today: NaiveDate) -> Result<GoalStatus> {
        let completion_pct = percent_of(goal.current_amount, goal.target_amount);
        let days_remaining = goal.deadline.map(|deadline| days_until(deadline, today));

        Ok(GoalStatus {
            goal_id: goal.id.clone(),
            completion_pct,
            days_remaining,
        })
    }

    fn status_all(&self, goals: &[Goal], today: NaiveDate) -> Result<Vec<GoalStatus>> {
        debug!("Evaluating {} goals as of {}", goals.len(), today);
        goals.iter().map(|g| self.status(g, today)).collect()
    }
}
