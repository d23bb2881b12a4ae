use chrono::{DateTime, Duration, Utc};
use reorder_core::config::SizeChangeConfig;
use reorder_core::constants::SECONDS_PER_DAY;
use reorder_core::models::SizeBracket;
use serde::Serialize;

/// Estimated move to the next product size.
///
/// Either all three fields are set or none is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeChangeEstimate {
    pub probability: Option<f64>,
    pub next_size: Option<String>,
    pub estimated_date: Option<DateTime<Utc>>,
}

impl SizeChangeEstimate {
    pub fn none() -> Self {
        Self {
            probability: None,
            next_size: None,
            estimated_date: None,
        }
    }

    pub fn is_some(&self) -> bool {
        self.probability.is_some()
    }
}

/// Combines two signals into a size-change probability:
///
/// - usage: consumption above what the current size typically needs
///   (a child outgrowing a size goes through more of them)
/// - age: how close the child is to the upper age bound of the bracket
///
/// ```text
/// usage = clamp((rate / expected - 1) / usage_ratio_span, 0, 1)
/// age   = clamp(1 - months_to_bracket_end / proximity_window_months, 0, 1)
/// p     = clamp(usage_weight·usage + age_weight·age, 0, 1)
/// ```
///
/// The estimated date is `now + clamp(base_lead_days / p, min, max)` days.
#[derive(Debug, Clone, Default)]
pub struct SizeChangePredictor {
    config: SizeChangeConfig,
}

impl SizeChangePredictor {
    pub fn new(config: SizeChangeConfig) -> Self {
        Self { config }
    }

    pub fn predict(
        &self,
        age_months: f64,
        consumption_rate: f64,
        now: DateTime<Utc>,
    ) -> SizeChangeEstimate {
        let brackets = &self.config.brackets;
        let Some(idx) = brackets.iter().position(|b| b.contains(age_months)) else {
            return SizeChangeEstimate::none();
        };
        let Some(next) = brackets.get(idx + 1) else {
            return SizeChangeEstimate::none();
        };

        let probability = self.probability(&brackets[idx], age_months, consumption_rate);
        if probability < self.config.min_reporting_probability {
            return SizeChangeEstimate::none();
        }

        let lead_days = (self.config.base_lead_days / probability)
            .clamp(self.config.min_lead_days, self.config.max_lead_days);
        let lead = Duration::seconds((lead_days * SECONDS_PER_DAY as f64).round() as i64);

        SizeChangeEstimate {
            probability: Some(probability),
            next_size: Some(next.label.clone()),
            estimated_date: Some(now + lead),
        }
    }

    fn probability(&self, current: &SizeBracket, age_months: f64, rate: f64) -> f64 {
        let c = &self.config;
        let usage_signal = if rate.is_finite() && current.expected_daily_usage > 0.0 {
            ((rate / current.expected_daily_usage - 1.0) / c.usage_ratio_span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let months_left = current.max_age_months - age_months;
        let age_signal = (1.0 - months_left / c.proximity_window_months).clamp(0.0, 1.0);

        (c.usage_weight * usage_signal + c.age_weight * age_signal).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_signal_saturates() {
        let predictor = SizeChangePredictor::default();
        let bracket = SizeBracket::new("Size 1", 1.0, 4.0, 8.0);
        // Far from the bracket end: age signal is zero.
        assert_eq!(predictor.probability(&bracket, 1.0, 8.0), 0.0);
        assert!((predictor.probability(&bracket, 1.0, 10.0) - 0.3).abs() < 1e-9);
        assert!((predictor.probability(&bracket, 1.0, 40.0) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn age_signal_grows_toward_bracket_end() {
        let predictor = SizeChangePredictor::default();
        let bracket = SizeBracket::new("Size 1", 1.0, 4.0, 8.0);
        assert!((predictor.probability(&bracket, 3.0, 0.0) - 0.2).abs() < 1e-9);
        assert!((predictor.probability(&bracket, 3.999, 0.0) - 0.4).abs() < 1e-3);
    }
}
