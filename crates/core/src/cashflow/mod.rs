//! Cash flow module - weekly income/expense bucketing.

mod cashflow_model;
mod cashflow_service;
#[cfg(test)]
mod cashflow_service_tests;
mod cashflow_traits;

pub use cashflow_model::CashFlowBucket;
pub use cashflow_service::CashFlowService;
pub use cashflow_traits::CashFlowServiceTrait;
