use serde::{Deserialize, Serialize};

use super::defaults;

/// Growth rate applying to children younger than `max_age_months`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthBracket {
    pub max_age_months: f64,
    /// Increase of the growth multiplier per elapsed month.
    pub monthly_rate: f64,
}

/// Growth adjustment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Upper bound on any single day's multiplier.
    pub max_factor: f64,
    /// Sorted by `max_age_months`. Children older than the last bracket do
    /// not get a growth adjustment.
    pub brackets: Vec<GrowthBracket>,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            max_factor: defaults::DEFAULT_GROWTH_MAX_FACTOR,
            brackets: defaults::DEFAULT_GROWTH_BRACKETS
                .iter()
                .map(|&(max_age_months, monthly_rate)| GrowthBracket {
                    max_age_months,
                    monthly_rate,
                })
                .collect(),
        }
    }
}
