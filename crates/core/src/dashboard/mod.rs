//! Dashboard module - one-call evaluation of a full user snapshot.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

pub use dashboard_model::{DashboardInput, DashboardSummary, EngineWarning, WarningKind};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
