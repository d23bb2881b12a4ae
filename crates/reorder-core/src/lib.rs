//! # reorder-core
//!
//! Foundation crate for the reorder prediction engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ReorderConfig;
pub use errors::{AccessorError, ForecastError, PredictionError, PredictionResult};
pub use models::{
    ChildId, ChildProfile, ConfidenceLevel, ConsumptionPrediction, DailyUsage, InventorySnapshot,
    PredictionDraft, PredictionWarning, UsageRecord,
};
