//! Forecasting methods.
//!
//! Every method fits a daily series and returns both the out-of-sample
//! forecast and its in-sample predictions, which feed the fit statistics.

pub mod constant;
pub mod decomposition;
pub mod moving_average;
pub mod mstl;

pub use constant::ConstantModel;
pub use decomposition::AdditiveDecomposition;
pub use moving_average::MovingAverage;
pub use mstl::MstlEts;

use reorder_core::errors::ForecastError;

/// Forecast plus in-sample predictions from one method.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelFit {
    /// One value per future day.
    pub forecast: Vec<f64>,
    /// One value per training day. Entries the method cannot predict are NaN.
    pub fitted: Vec<f64>,
    /// Lower and upper prediction interval, when the method provides one.
    pub interval: Option<(Vec<f64>, Vec<f64>)>,
}

impl ModelFit {
    /// Whether every forecast value is a finite number.
    pub fn is_finite(&self) -> bool {
        self.forecast.iter().all(|v| v.is_finite())
    }
}

/// A daily consumption forecasting method.
pub trait ForecastModel: Send + Sync {
    /// Tag recorded as the prediction's `model_version`.
    fn version(&self) -> &'static str;

    /// Fit `values` (oldest first) and forecast `horizon` days ahead.
    fn fit_predict(&self, values: &[f64], horizon: usize) -> Result<ModelFit, ForecastError>;
}

pub(crate) fn model_fit_error(method: &str, err: impl std::fmt::Display) -> ForecastError {
    ForecastError::ModelFit {
        reason: format!("{method}: {err}"),
    }
}
