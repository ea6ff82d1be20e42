//! Signal handler traits.

use super::signals_model::ThresholdSignal;
use crate::errors::Result;

/// Contract for the notification collaborator.
///
/// Handlers are invoked synchronously after a dashboard evaluation
/// completes. A failing handler never fails the evaluation; the engine
/// logs the error and moves on.
pub trait SignalHandlerTrait: Send + Sync {
    fn handle(&self, signal: &ThresholdSignal) -> Result<()>;
}
