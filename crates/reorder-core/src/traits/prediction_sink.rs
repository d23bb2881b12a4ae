use std::sync::Arc;

use uuid::Uuid;

use crate::errors::AccessorError;
use crate::models::{ChildId, ConsumptionPrediction};

/// Append-only destination for generated predictions.
///
/// Implementations must keep superseded predictions queryable; the engine
/// never asks for an update or delete.
pub trait IPredictionSink: Send + Sync {
    fn record(&self, prediction: &ConsumptionPrediction) -> Result<(), AccessorError>;

    /// Id of the most recent prediction stored for `child_id`, if any.
    fn latest_prediction_id(&self, child_id: ChildId) -> Result<Option<Uuid>, AccessorError>;
}

impl<T: IPredictionSink + ?Sized> IPredictionSink for Arc<T> {
    fn record(&self, prediction: &ConsumptionPrediction) -> Result<(), AccessorError> {
        (**self).record(prediction)
    }

    fn latest_prediction_id(&self, child_id: ChildId) -> Result<Option<Uuid>, AccessorError> {
        (**self).latest_prediction_id(child_id)
    }
}

/// Sink that discards predictions, for callers that persist on their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl IPredictionSink for NoopSink {
    fn record(&self, _prediction: &ConsumptionPrediction) -> Result<(), AccessorError> {
        Ok(())
    }

    fn latest_prediction_id(&self, _child_id: ChildId) -> Result<Option<Uuid>, AccessorError> {
        Ok(None)
    }
}
