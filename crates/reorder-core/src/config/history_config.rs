use serde::{Deserialize, Serialize};

use super::defaults;

/// Usage history window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// How far back usage records are read.
    pub lookback_days: u32,
    /// Minimum number of distinct days with usage before a model is fit.
    pub min_distinct_days: usize,
    /// Trailing window used for the current consumption rate.
    pub rate_window_days: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            lookback_days: defaults::DEFAULT_LOOKBACK_DAYS,
            min_distinct_days: defaults::DEFAULT_MIN_DISTINCT_DAYS,
            rate_window_days: defaults::DEFAULT_RATE_WINDOW_DAYS,
        }
    }
}
