use reorder_core::constants::model_versions;
use reorder_core::errors::ForecastError;

use super::{model_fit_error, ForecastModel, ModelFit};

/// Flat forecast for a series with no variance.
///
/// Any other method would either fail on the degenerate input or report a
/// perfect fit that says nothing about accuracy.
pub struct ConstantModel;

impl ForecastModel for ConstantModel {
    fn version(&self) -> &'static str {
        model_versions::CONSTANT
    }

    fn fit_predict(&self, values: &[f64], horizon: usize) -> Result<ModelFit, ForecastError> {
        let level = *values
            .first()
            .ok_or_else(|| model_fit_error("constant", "empty series"))?;
        Ok(ModelFit {
            forecast: vec![level; horizon],
            fitted: vec![level; values.len()],
            interval: None,
        })
    }
}
