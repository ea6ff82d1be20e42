//! Budgets module - utilization evaluation.

mod budgets_model;
mod budgets_service;
mod budgets_traits;

pub use budgets_model::{Budget, BudgetStatus};
pub use budgets_service::BudgetService;
pub use budgets_traits::BudgetServiceTrait;
