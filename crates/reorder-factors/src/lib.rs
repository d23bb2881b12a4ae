//! # reorder-factors
//!
//! Multiplicative adjustment factors applied to a raw consumption forecast.
//! Factors: growth (child age), seasonal (calendar month).
//! Both are pure functions of their inputs and the configuration.

pub mod curve;
pub mod factors;

pub use curve::AdjustmentCurve;
pub use factors::{growth::growth_factors, seasonal::seasonal_factors};
