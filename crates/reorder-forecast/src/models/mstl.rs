use augurs::{ets::AutoETS, forecaster::Forecaster, mstl::MSTLModel};
use reorder_core::constants::{model_versions, WEEKLY_PERIOD};
use reorder_core::errors::ForecastError;

use super::{model_fit_error, ForecastModel, ModelFit};

/// MSTL decomposition with weekly seasonality and a non-seasonal AutoETS
/// trend model.
pub struct MstlEts {
    /// Prediction interval level, e.g. 0.95.
    pub level: f64,
}

impl MstlEts {
    pub fn new(level: f64) -> Self {
        Self { level }
    }
}

impl ForecastModel for MstlEts {
    fn version(&self) -> &'static str {
        model_versions::MSTL_ETS
    }

    fn fit_predict(&self, values: &[f64], horizon: usize) -> Result<ModelFit, ForecastError> {
        let trend = AutoETS::non_seasonal().into_trend_model();
        let mstl = MSTLModel::new(vec![WEEKLY_PERIOD], trend);
        let mut forecaster = Forecaster::new(mstl);

        forecaster
            .fit(values)
            .map_err(|e| model_fit_error("mstl fit", e))?;
        let forecast = forecaster
            .predict(horizon, self.level)
            .map_err(|e| model_fit_error("mstl predict", e))?;
        let in_sample = forecaster
            .predict_in_sample(None)
            .map_err(|e| model_fit_error("mstl in-sample", e))?;

        let interval = forecast
            .intervals
            .map(|i| (i.lower, i.upper));
        Ok(ModelFit {
            forecast: forecast.point,
            fitted: in_sample.point,
            interval,
        })
    }
}
