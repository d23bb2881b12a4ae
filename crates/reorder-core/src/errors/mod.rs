//! Error handling for the reorder engine.
//! One error enum per subsystem, `thiserror` only.

pub mod accessor_error;
pub mod config_error;
pub mod forecast_error;
pub mod prediction_error;

pub use accessor_error::AccessorError;
pub use config_error::ConfigError;
pub use forecast_error::ForecastError;
pub use prediction_error::{PredictionError, PredictionResult};
