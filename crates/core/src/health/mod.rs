//! Health module - composite financial-health scoring.

mod model;
mod service;
mod traits;

pub use model::{HealthReport, HealthScore, OverallBand, ScoreBand, Subscore};
pub use service::HealthService;
pub use traits::HealthServiceTrait;
