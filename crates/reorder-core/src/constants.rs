/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Average length of a calendar month in days (365.25 / 12).
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// Seconds in a day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Weekly seasonality period for daily usage series.
pub const WEEKLY_PERIOD: usize = 7;

/// Hard upper bound on a forecast horizon, regardless of configuration.
pub const MAX_HORIZON_DAYS: u32 = 365;

/// Model version tags recorded on every prediction.
pub mod model_versions {
    pub const MSTL_ETS: &str = "mstl-ets-v1";
    pub const ADDITIVE_DECOMPOSITION: &str = "additive-decomposition-v1";
    pub const MOVING_AVERAGE: &str = "moving-average-v1";
    pub const CONSTANT: &str = "constant-v1";
    /// Recorded when no model could be fit at all.
    pub const NONE: &str = "unfitted";
}
