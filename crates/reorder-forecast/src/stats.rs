use serde::Serialize;

/// Goodness of fit of a model's in-sample predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitStatistics {
    /// `None` when no in-sample prediction was finite.
    pub mean_absolute_error: Option<f64>,
    /// `1 - SS_res / SS_tot`, clamped to [0, 1]. `None` when the actual
    /// values have no variance, since the ratio is undefined there.
    pub r_squared: Option<f64>,
    /// Number of days the model was fit on.
    pub points: u32,
}

impl FitStatistics {
    /// Compare `fitted` against `actual` position by position.
    /// Pairs with a non-finite fitted value are skipped.
    pub fn compute(actual: &[f64], fitted: &[f64]) -> Self {
        let pairs: Vec<(f64, f64)> = actual
            .iter()
            .zip(fitted)
            .filter(|(_, f)| f.is_finite())
            .map(|(a, f)| (*a, *f))
            .collect();

        let points = actual.len() as u32;
        if pairs.is_empty() {
            return Self {
                mean_absolute_error: None,
                r_squared: None,
                points,
            };
        }

        let n = pairs.len() as f64;
        let mae = pairs.iter().map(|(a, f)| (a - f).abs()).sum::<f64>() / n;

        let mean = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
        let ss_tot: f64 = pairs.iter().map(|(a, _)| (a - mean).powi(2)).sum();
        let ss_res: f64 = pairs.iter().map(|(a, f)| (a - f).powi(2)).sum();
        let r_squared = if ss_tot > f64::EPSILON {
            Some((1.0 - ss_res / ss_tot).clamp(0.0, 1.0))
        } else {
            None
        };

        Self {
            mean_absolute_error: Some(mae),
            r_squared,
            points,
        }
    }
}
