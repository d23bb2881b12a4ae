use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::SizeBracket;

/// Size-change predictor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeChangeConfig {
    /// Weight of the above-expected-usage signal.
    pub usage_weight: f64,
    /// Weight of the approaching-bracket-end signal.
    pub age_weight: f64,
    /// Usage ratio above 1.0 at which the usage signal saturates (1.0 + span).
    pub usage_ratio_span: f64,
    /// Months before the bracket's upper age bound where the age signal starts.
    pub proximity_window_months: f64,
    /// Estimates below this probability are not reported.
    pub min_reporting_probability: f64,
    /// Lead time at probability 1.0; scales as `base / probability`.
    pub base_lead_days: f64,
    pub min_lead_days: f64,
    pub max_lead_days: f64,
    /// Product size table, ordered by age.
    pub brackets: Vec<SizeBracket>,
}

impl Default for SizeChangeConfig {
    fn default() -> Self {
        Self {
            usage_weight: defaults::DEFAULT_USAGE_WEIGHT,
            age_weight: defaults::DEFAULT_AGE_WEIGHT,
            usage_ratio_span: defaults::DEFAULT_USAGE_RATIO_SPAN,
            proximity_window_months: defaults::DEFAULT_PROXIMITY_WINDOW_MONTHS,
            min_reporting_probability: defaults::DEFAULT_MIN_REPORTING_PROBABILITY,
            base_lead_days: defaults::DEFAULT_BASE_LEAD_DAYS,
            min_lead_days: defaults::DEFAULT_MIN_LEAD_DAYS,
            max_lead_days: defaults::DEFAULT_MAX_LEAD_DAYS,
            brackets: defaults::default_size_brackets(),
        }
    }
}
