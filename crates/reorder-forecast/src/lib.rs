//! # reorder-forecast
//!
//! Turns a child's daily usage into a consumption forecast.
//!
//! Pipeline: usage records → [`DailySeries`] (zero-filled, one value per
//! calendar day) → [`Forecaster::fit_forecast`] → [`ForecastOutput`].
//!
//! Method chain, first applicable wins:
//! 1. constant level (zero-variance series)
//! 2. MSTL with an AutoETS trend (weekly seasonality, augurs)
//! 3. additive decomposition (linear trend + weekly indices)
//! 4. trailing moving average

pub mod forecaster;
pub mod models;
pub mod series;
pub mod stats;

pub use forecaster::{ForecastOutput, Forecaster};
pub use series::{aggregate_daily, DailySeries};
pub use stats::FitStatistics;
