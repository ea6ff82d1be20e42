//! Portfolio snapshot module - models and latest-snapshot resolution.

mod snapshot_model;
mod snapshot_resolver;
#[cfg(test)]
mod snapshot_resolver_tests;

pub use snapshot_model::{Holding, PortfolioSnapshot};
pub use snapshot_resolver::{is_more_current, resolve_current};
