use chrono::NaiveDate;
use reorder_core::config::{GrowthConfig, SeasonalConfig};
use serde::Serialize;

use crate::factors::{self, growth, seasonal};

/// Per-day adjustment multipliers over a forecast horizon.
///
/// ```text
/// adjusted[d] = raw[d] × growth[d] × seasonal[d]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustmentCurve {
    pub growth: Vec<f64>,
    pub seasonal: Vec<f64>,
}

impl AdjustmentCurve {
    /// Build the curve for a child of `age_months` whose horizon starts on `start`.
    pub fn build(
        age_months: f64,
        start: NaiveDate,
        horizon_days: u32,
        growth_config: &GrowthConfig,
        seasonal_config: &SeasonalConfig,
    ) -> Self {
        let dates = factors::horizon_dates(start, horizon_days);
        Self {
            growth: growth::growth_factors(age_months, horizon_days, growth_config),
            seasonal: seasonal::seasonal_factors(&dates, seasonal_config),
        }
    }

    pub fn len(&self) -> usize {
        self.growth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.growth.is_empty()
    }

    /// Combined multiplier for day `day`. Past the end of the curve the last
    /// day's multiplier is held.
    pub fn combined(&self, day: usize) -> f64 {
        let g = hold_last(&self.growth, day);
        let s = hold_last(&self.seasonal, day);
        g * s
    }

    /// Apply the curve to a raw daily forecast.
    pub fn apply(&self, raw: &[f64]) -> Vec<f64> {
        raw.iter()
            .enumerate()
            .map(|(day, value)| value * self.combined(day))
            .collect()
    }

    /// Mean growth multiplier over the horizon (1.0 when empty).
    pub fn mean_growth(&self) -> f64 {
        mean_or_one(&self.growth)
    }

    /// Mean seasonal multiplier over the horizon (1.0 when empty).
    pub fn mean_seasonal(&self) -> f64 {
        mean_or_one(&self.seasonal)
    }
}

fn hold_last(values: &[f64], day: usize) -> f64 {
    values
        .get(day)
        .or_else(|| values.last())
        .copied()
        .unwrap_or(1.0)
}

fn mean_or_one(values: &[f64]) -> f64 {
    if values.is_empty() {
        1.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
