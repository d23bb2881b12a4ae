use serde::{Deserialize, Serialize};

use super::defaults;

/// Requirements a fit must meet to earn a confidence tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceTier {
    pub min_points: u32,
    pub max_mae: f64,
    pub min_r_squared: f64,
}

impl ConfidenceTier {
    pub const fn new(min_points: u32, max_mae: f64, min_r_squared: f64) -> Self {
        Self {
            min_points,
            max_mae,
            min_r_squared,
        }
    }

    const fn from_tuple(t: (u32, f64, f64)) -> Self {
        Self::new(t.0, t.1, t.2)
    }
}

/// Confidence scoring thresholds.
///
/// A fit below the floor (too few points, MAE at or above `very_low_mae`,
/// R² under `very_low_r_squared`) is `VeryLow`. Above the floor the best tier
/// whose requirements are all met wins; a fit meeting none is `Low`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    pub very_low_min_points: u32,
    pub very_low_mae: f64,
    pub very_low_r_squared: f64,
    pub very_high: ConfidenceTier,
    pub high: ConfidenceTier,
    pub medium: ConfidenceTier,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            very_low_min_points: defaults::DEFAULT_VERY_LOW_MIN_POINTS,
            very_low_mae: defaults::DEFAULT_VERY_LOW_MAE,
            very_low_r_squared: defaults::DEFAULT_VERY_LOW_R_SQUARED,
            very_high: ConfidenceTier::from_tuple(defaults::DEFAULT_VERY_HIGH_TIER),
            high: ConfidenceTier::from_tuple(defaults::DEFAULT_HIGH_TIER),
            medium: ConfidenceTier::from_tuple(defaults::DEFAULT_MEDIUM_TIER),
        }
    }
}
