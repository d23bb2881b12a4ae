//! Confidence scoring from fit statistics and data volume.

pub mod scorer;

pub use scorer::{score, ConfidenceScorer};
