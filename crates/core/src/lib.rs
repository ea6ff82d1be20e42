//! LedgerLens Core - Financial aggregation and scoring engine.
//!
//! This crate contains the pure computation core behind the LedgerLens
//! dashboard: net worth aggregation, spending and cash-flow breakdowns,
//! budget and goal evaluation, latest-snapshot resolution, classification
//! sums, and the composite financial-health score.
//!
//! The engine is storage-agnostic and side-effect free: every service is a
//! pure function over the records passed in. Persistence, transport and
//! presentation live in the surrounding applications.

pub mod accounts;
pub mod budgets;
pub mod cashflow;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod goals;
pub mod health;
pub mod net_worth;
pub mod portfolio;
pub mod signals;
pub mod spending;
pub mod transactions;
pub mod utils;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
