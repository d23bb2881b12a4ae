use reorder_core::constants::{model_versions, WEEKLY_PERIOD};
use reorder_core::errors::ForecastError;

use super::{model_fit_error, ForecastModel, ModelFit};

/// Additive decomposition: least-squares linear trend plus centered weekly
/// seasonal indices.
///
/// ```text
/// y[t] ≈ intercept + slope·t + season[t mod 7]
/// ```
///
/// The trend is extrapolated for at most one training length past the last
/// observation and held flat after that.
pub struct AdditiveDecomposition;

impl ForecastModel for AdditiveDecomposition {
    fn version(&self) -> &'static str {
        model_versions::ADDITIVE_DECOMPOSITION
    }

    fn fit_predict(&self, values: &[f64], horizon: usize) -> Result<ModelFit, ForecastError> {
        let n = values.len();
        if n < 2 * WEEKLY_PERIOD {
            return Err(model_fit_error(
                "additive decomposition",
                format!("needs {} days, got {n}", 2 * WEEKLY_PERIOD),
            ));
        }

        let (intercept, slope, season) = fit_components(values);
        let trend = |t: usize| intercept + slope * t.min(2 * n - 1) as f64;

        let fitted = (0..n)
            .map(|t| trend(t) + season[t % WEEKLY_PERIOD])
            .collect();
        let forecast = (n..n + horizon)
            .map(|t| trend(t) + season[t % WEEKLY_PERIOD])
            .collect();

        Ok(ModelFit {
            forecast,
            fitted,
            interval: None,
        })
    }
}

/// Trend and weekly components fit jointly by least squares.
///
/// The slope is estimated within weekday positions, so a periodic pattern
/// does not leak into the trend. Returns `(intercept, slope, indices)` with
/// the indices summing to zero.
fn fit_components(values: &[f64]) -> (f64, f64, [f64; WEEKLY_PERIOD]) {
    let mut t_sums = [0.0; WEEKLY_PERIOD];
    let mut y_sums = [0.0; WEEKLY_PERIOD];
    let mut counts = [0.0; WEEKLY_PERIOD];
    for (t, y) in values.iter().enumerate() {
        let k = t % WEEKLY_PERIOD;
        t_sums[k] += t as f64;
        y_sums[k] += y;
        counts[k] += 1.0;
    }
    let mut t_means = [0.0; WEEKLY_PERIOD];
    let mut y_means = [0.0; WEEKLY_PERIOD];
    for k in 0..WEEKLY_PERIOD {
        if counts[k] > 0.0 {
            t_means[k] = t_sums[k] / counts[k];
            y_means[k] = y_sums[k] / counts[k];
        }
    }

    let mut cov = 0.0;
    let mut var = 0.0;
    for (t, y) in values.iter().enumerate() {
        let k = t % WEEKLY_PERIOD;
        let dt = t as f64 - t_means[k];
        cov += dt * (y - y_means[k]);
        var += dt * dt;
    }
    let slope = if var > 0.0 { cov / var } else { 0.0 };

    let mut levels = [0.0; WEEKLY_PERIOD];
    for k in 0..WEEKLY_PERIOD {
        levels[k] = y_means[k] - slope * t_means[k];
    }
    let intercept = levels.iter().sum::<f64>() / WEEKLY_PERIOD as f64;
    let mut indices = [0.0; WEEKLY_PERIOD];
    for k in 0..WEEKLY_PERIOD {
        indices[k] = levels[k] - intercept;
    }
    (intercept, slope, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_linear_trend() {
        let values: Vec<f64> = (0..28).map(|t| 2.0 + 0.5 * t as f64).collect();
        let (intercept, slope, season) = fit_components(&values);
        assert!((intercept - 2.0).abs() < 1e-9);
        assert!((slope - 0.5).abs() < 1e-9);
        assert!(season.iter().all(|s| s.abs() < 1e-9));
    }

    #[test]
    fn recovers_weekly_pattern() {
        let pattern = [5.0, 6.0, 7.0, 6.0, 5.0, 7.0, 6.0];
        let values: Vec<f64> = (0..28).map(|t| pattern[t % 7]).collect();
        let fit = AdditiveDecomposition.fit_predict(&values, 7).unwrap();
        for (t, f) in fit.forecast.iter().enumerate() {
            assert!((f - pattern[(28 + t) % 7]).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_short_series() {
        assert!(AdditiveDecomposition.fit_predict(&[1.0; 10], 3).is_err());
    }
}
