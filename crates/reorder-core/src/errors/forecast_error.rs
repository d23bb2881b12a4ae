/// Recoverable forecasting conditions.
///
/// These never reach the caller of the prediction engine: the orchestrator
/// folds them into a degraded prediction with `VeryLow` confidence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForecastError {
    #[error("insufficient usage history: {distinct_days} distinct days, need {required}")]
    InsufficientData { distinct_days: usize, required: usize },

    #[error("model fit failed: {reason}")]
    ModelFit { reason: String },

    #[error("invalid forecast horizon: {horizon}")]
    InvalidHorizon { horizon: u32 },
}
