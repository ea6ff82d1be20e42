//! Signals module - threshold-crossing notifications.

mod signals_model;
mod signals_traits;

pub use signals_model::ThresholdSignal;
pub use signals_traits::SignalHandlerTrait;
