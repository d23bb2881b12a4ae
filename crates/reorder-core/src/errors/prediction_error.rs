use crate::models::ChildId;

use super::AccessorError;

/// Hard failures surfaced to callers of the prediction engine.
///
/// Data-quality problems are never reported here; they degrade the returned
/// prediction instead.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("prediction unavailable: child {child_id} not found")]
    ChildNotFound { child_id: ChildId },

    #[error("prediction unavailable: {0}")]
    Unavailable(#[from] AccessorError),

    #[error("invalid horizon {horizon} days (allowed 1..={max})")]
    InvalidHorizon { horizon: u32, max: u32 },

    #[error("prediction invariant violated: {reason}")]
    Invariant { reason: String },
}

impl PredictionError {
    /// True when the failure comes from infrastructure rather than the request.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ChildNotFound { .. } | Self::Unavailable(_))
    }
}

pub type PredictionResult<T> = Result<T, PredictionError>;
