use reorder_core::config::{ConfidenceConfig, ConfidenceTier};
use reorder_core::models::ConfidenceLevel;

/// Map fit quality and data volume to a confidence label.
///
/// Missing or non-finite MAE counts as infinitely large, missing or
/// non-finite R² as zero, so unknown quality can only lower the label.
/// With a validated config, raising `points` or R², or lowering MAE, never
/// lowers the result.
pub fn score(
    mae: Option<f64>,
    r_squared: Option<f64>,
    points: u32,
    config: &ConfidenceConfig,
) -> ConfidenceLevel {
    let mae = mae.filter(|m| m.is_finite()).unwrap_or(f64::INFINITY);
    let r2 = r_squared.filter(|r| r.is_finite()).unwrap_or(0.0);

    if points < config.very_low_min_points
        || mae >= config.very_low_mae
        || r2 < config.very_low_r_squared
    {
        return ConfidenceLevel::VeryLow;
    }

    let meets = |tier: &ConfidenceTier| {
        points >= tier.min_points && mae <= tier.max_mae && r2 >= tier.min_r_squared
    };
    if meets(&config.very_high) {
        ConfidenceLevel::VeryHigh
    } else if meets(&config.high) {
        ConfidenceLevel::High
    } else if meets(&config.medium) {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// [`score`] bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfidenceScorer {
    config: ConfidenceConfig,
}

impl ConfidenceScorer {
    pub fn new(config: ConfidenceConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, mae: Option<f64>, r_squared: Option<f64>, points: u32) -> ConfidenceLevel {
        score(mae, r_squared, points, &self.config)
    }
}
