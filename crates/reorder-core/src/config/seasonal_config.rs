use serde::{Deserialize, Serialize};

use super::defaults;

/// Seasonal adjustment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalConfig {
    /// One multiplier per calendar month, January first.
    pub monthly_factors: [f64; 12],
    pub min_factor: f64,
    pub max_factor: f64,
}

impl Default for SeasonalConfig {
    fn default() -> Self {
        Self {
            monthly_factors: defaults::DEFAULT_MONTHLY_FACTORS,
            min_factor: defaults::DEFAULT_SEASONAL_MIN_FACTOR,
            max_factor: defaults::DEFAULT_SEASONAL_MAX_FACTOR,
        }
    }
}
