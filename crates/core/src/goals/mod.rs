//! Goals module - savings goal tracking.

mod goals_model;
mod goals_service;
#[cfg(test)]
mod goals_service_tests;
mod goals_traits;

pub use goals_model::{Goal, GoalStatus};
pub use goals_service::GoalService;
pub use goals_traits::GoalServiceTrait;
