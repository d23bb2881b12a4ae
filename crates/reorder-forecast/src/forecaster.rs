//! Forecaster: method selection, fallback, output shaping.

use std::time::Instant;

use reorder_core::config::ForecastConfig;
use reorder_core::constants::model_versions;
use reorder_core::errors::ForecastError;
use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{
    AdditiveDecomposition, ConstantModel, ForecastModel, ModelFit, MovingAverage, MstlEts,
};
use crate::series::DailySeries;
use crate::stats::FitStatistics;

/// Minimum number of days with usage before any method is tried.
const MIN_USAGE_DAYS: usize = 2;

/// Result of fitting one child's series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastOutput {
    /// Tag of the method that produced the forecast.
    pub model_version: &'static str,
    /// Forecast consumption per future day, never negative.
    pub daily: Vec<f64>,
    /// Rounded sum of `daily`.
    pub predicted_total: u32,
    /// Lower and upper prediction bounds per day, never negative.
    pub interval: Option<(Vec<f64>, Vec<f64>)>,
    pub statistics: FitStatistics,
    /// Why the seasonal model was rejected, when it was tried and failed.
    pub fallback_reason: Option<String>,
}

impl ForecastOutput {
    /// Whether a method other than the seasonal model produced the forecast.
    pub fn is_fallback(&self) -> bool {
        self.model_version != model_versions::MSTL_ETS
    }
}

/// Fits a consumption model to a daily series and forecasts ahead.
///
/// Stateless apart from configuration; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Forecaster {
    config: ForecastConfig,
}

impl Forecaster {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Fit `series` and forecast `horizon_days` days past its last day.
    pub fn fit_forecast(
        &self,
        series: &DailySeries,
        horizon_days: u32,
    ) -> Result<ForecastOutput, ForecastError> {
        if horizon_days == 0 {
            return Err(ForecastError::InvalidHorizon {
                horizon: horizon_days,
            });
        }
        let usage_days = series.days_with_usage();
        if usage_days < MIN_USAGE_DAYS {
            return Err(ForecastError::ModelFit {
                reason: format!(
                    "{usage_days} day(s) with usage, at least {MIN_USAGE_DAYS} needed"
                ),
            });
        }

        let training = series.tail(self.config.max_training_points);
        let values = training.values();
        let horizon = horizon_days as usize;

        let started = Instant::now();
        let (model_version, fit, fallback_reason) = self.select_and_fit(values, horizon)?;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        if elapsed_ms > self.config.fit_warn_after_ms {
            warn!(
                model_version,
                elapsed_ms,
                points = values.len(),
                "slow forecast fit"
            );
        }

        let statistics = FitStatistics::compute(values, &fit.fitted);
        let daily: Vec<f64> = fit.forecast.iter().map(|v| v.max(0.0)).collect();
        let predicted_total = daily.iter().sum::<f64>().round().max(0.0) as u32;
        let interval = fit.interval.map(|(lower, upper)| {
            (
                lower.iter().map(|v| v.max(0.0)).collect(),
                upper.iter().map(|v| v.max(0.0)).collect(),
            )
        });

        debug!(
            model_version,
            points = statistics.points,
            mae = ?statistics.mean_absolute_error,
            r_squared = ?statistics.r_squared,
            predicted_total,
            "forecast fitted"
        );

        Ok(ForecastOutput {
            model_version,
            daily,
            predicted_total,
            interval,
            statistics,
            fallback_reason,
        })
    }

    /// Try methods in order of preference. Returns the winning method's tag,
    /// its fit, and why the seasonal model was skipped, if it was.
    fn select_and_fit(
        &self,
        values: &[f64],
        horizon: usize,
    ) -> Result<(&'static str, ModelFit, Option<String>), ForecastError> {
        if is_constant(values) {
            let model = ConstantModel;
            return Ok((model.version(), model.fit_predict(values, horizon)?, None));
        }

        let mut fallback_reason = None;
        if values.len() >= self.config.min_seasonal_points {
            let seasonal = MstlEts::new(self.config.interval_level);
            match checked_fit(&seasonal, values, horizon) {
                Ok(fit) => return Ok((seasonal.version(), fit, None)),
                Err(e) => {
                    debug!(error = %e, "seasonal model failed, falling back");
                    fallback_reason = Some(e.to_string());
                }
            }

            let decomposition = AdditiveDecomposition;
            match checked_fit(&decomposition, values, horizon) {
                Ok(fit) => return Ok((decomposition.version(), fit, fallback_reason)),
                Err(e) => {
                    debug!(error = %e, "decomposition failed, falling back");
                }
            }
        }

        let average = MovingAverage::new(self.config.moving_average_window);
        let fit = checked_fit(&average, values, horizon)?;
        Ok((average.version(), fit, fallback_reason))
    }
}

/// Fit and reject non-finite forecasts.
fn checked_fit(
    model: &dyn ForecastModel,
    values: &[f64],
    horizon: usize,
) -> Result<ModelFit, ForecastError> {
    let fit = model.fit_predict(values, horizon)?;
    if !fit.is_finite() || fit.forecast.len() != horizon {
        return Err(ForecastError::ModelFit {
            reason: format!("{} produced an unusable forecast", model.version()),
        });
    }
    Ok(fit)
}

fn is_constant(values: &[f64]) -> bool {
    match values.first() {
        Some(first) => values.iter().all(|v| v == first),
        None => false,
    }
}
