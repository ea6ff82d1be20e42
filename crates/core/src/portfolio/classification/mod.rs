//! Classification module - sums of tagged holdings per resolved snapshot.

mod classification_model;
mod classification_service;

pub use classification_model::ClassificationSummary;
pub use classification_service::{ClassificationService, ClassificationServiceTrait};
