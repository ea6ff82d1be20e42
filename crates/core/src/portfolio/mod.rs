//! Portfolio module - snapshot resolution and classification sums.

pub mod classification;
pub mod snapshot;

pub use classification::{ClassificationService, ClassificationServiceTrait, ClassificationSummary};
pub use snapshot::{resolve_current, Holding, PortfolioSnapshot};
