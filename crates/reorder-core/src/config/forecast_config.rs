use serde::{Deserialize, Serialize};

use super::defaults;

/// Forecasting model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Horizon used when the caller does not pass one.
    pub default_horizon_days: u32,
    /// Largest horizon a caller may request.
    pub max_horizon_days: u32,
    /// Series length at which weekly seasonal models are used.
    pub min_seasonal_points: usize,
    /// Window of the moving-average fallback.
    pub moving_average_window: usize,
    /// Only the most recent N days are fit. Bounds the cost of one fit.
    pub max_training_points: usize,
    /// Fits slower than this are logged at warn level.
    pub fit_warn_after_ms: u64,
    /// Prediction interval level requested from the model.
    pub interval_level: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            default_horizon_days: defaults::DEFAULT_HORIZON_DAYS,
            max_horizon_days: defaults::DEFAULT_MAX_HORIZON_DAYS,
            min_seasonal_points: defaults::DEFAULT_MIN_SEASONAL_POINTS,
            moving_average_window: defaults::DEFAULT_MOVING_AVERAGE_WINDOW,
            max_training_points: defaults::DEFAULT_MAX_TRAINING_POINTS,
            fit_warn_after_ms: defaults::DEFAULT_FIT_WARN_AFTER_MS,
            interval_level: defaults::DEFAULT_INTERVAL_LEVEL,
        }
    }
}
