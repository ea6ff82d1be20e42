//! Spending module - per-category expense aggregation.

mod spending_model;
mod spending_service;
#[cfg(test)]
mod spending_service_tests;

pub use spending_model::CategorySpending;
pub use spending_service::{SpendingService, SpendingServiceTrait};
