//! Logging setup, span definitions and prediction counters.

pub mod metrics;
pub mod spans;
pub mod tracing_setup;

pub use metrics::{MetricsSnapshot, PredictionMetrics};
pub use tracing_setup::init_tracing;
