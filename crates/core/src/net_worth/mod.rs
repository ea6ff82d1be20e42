//! Net worth module - asset/liability aggregation.

mod net_worth_model;
mod net_worth_service;
#[cfg(test)]
mod net_worth_service_tests;
mod net_worth_traits;

pub use net_worth_model::NetWorthSummary;
pub use net_worth_service::NetWorthService;
pub use net_worth_traits::NetWorthServiceTrait;
