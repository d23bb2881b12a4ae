use reorder_core::constants::model_versions;
use reorder_core::errors::ForecastError;

use super::{model_fit_error, ForecastModel, ModelFit};

/// Flat forecast at the trailing mean of the last `window` days.
///
/// In-sample, day `t` is predicted by the mean of the up to `window` days
/// before it. Day 0 has no predecessor and is left as NaN.
pub struct MovingAverage {
    pub window: usize,
}

impl MovingAverage {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
        }
    }
}

impl ForecastModel for MovingAverage {
    fn version(&self) -> &'static str {
        model_versions::MOVING_AVERAGE
    }

    fn fit_predict(&self, values: &[f64], horizon: usize) -> Result<ModelFit, ForecastError> {
        if values.is_empty() {
            return Err(model_fit_error("moving average", "empty series"));
        }

        let fitted = (0..values.len())
            .map(|t| {
                if t == 0 {
                    f64::NAN
                } else {
                    mean(&values[t.saturating_sub(self.window)..t])
                }
            })
            .collect();

        let level = mean(&values[values.len().saturating_sub(self.window)..]);
        Ok(ModelFit {
            forecast: vec![level; horizon],
            fitted,
            interval: None,
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_is_trailing_mean() {
        let values = [1.0, 1.0, 1.0, 2.0, 4.0, 6.0];
        let fit = MovingAverage::new(3).fit_predict(&values, 2).unwrap();
        assert_eq!(fit.forecast, vec![4.0, 4.0]);
    }

    #[test]
    fn in_sample_uses_previous_days_only() {
        let values = [2.0, 4.0, 6.0];
        let fit = MovingAverage::new(7).fit_predict(&values, 1).unwrap();
        assert!(fit.fitted[0].is_nan());
        assert_eq!(fit.fitted[1], 2.0);
        assert_eq!(fit.fitted[2], 3.0);
    }
}
