//! # reorder-prediction
//!
//! Produces a [`ConsumptionPrediction`](reorder_core::ConsumptionPrediction)
//! for a child: how fast they consume, when on-hand stock runs out, when to
//! reorder, how much to trust the forecast, and whether a size change is near.
//!
//! Entry points: [`PredictionEngine`] for one child, [`BatchRunner`] for many.

pub mod confidence;
pub mod engine;
pub mod history;
pub mod observability;
pub mod size_change;

pub use confidence::ConfidenceScorer;
pub use engine::{BatchReport, BatchRunner, CancellationFlag, Collaborators, PredictionEngine};
pub use history::{HistoryWindow, Sufficiency, UsageHistory};
pub use observability::{init_tracing, MetricsSnapshot, PredictionMetrics};
pub use size_change::{SizeChangeEstimate, SizeChangePredictor};
