//! Size-change estimation from age and consumption.

pub mod predictor;

pub use predictor::{SizeChangeEstimate, SizeChangePredictor};
