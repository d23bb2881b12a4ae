// Single source of truth for all default values.

use crate::models::SizeBracket;

// --- History ---
pub const DEFAULT_LOOKBACK_DAYS: u32 = 90;
pub const DEFAULT_MIN_DISTINCT_DAYS: usize = 7;
pub const DEFAULT_RATE_WINDOW_DAYS: usize = 14;

// --- Forecast ---
pub const DEFAULT_HORIZON_DAYS: u32 = 30;
pub const DEFAULT_MAX_HORIZON_DAYS: u32 = 365;
pub const DEFAULT_MIN_SEASONAL_POINTS: usize = 14;
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 7;
pub const DEFAULT_MAX_TRAINING_POINTS: usize = 180;
pub const DEFAULT_FIT_WARN_AFTER_MS: u64 = 250;
pub const DEFAULT_INTERVAL_LEVEL: f64 = 0.95;

// --- Confidence ---
pub const DEFAULT_VERY_LOW_MIN_POINTS: u32 = 14;
pub const DEFAULT_VERY_LOW_MAE: f64 = 4.0;
pub const DEFAULT_VERY_LOW_R_SQUARED: f64 = 0.3;
pub const DEFAULT_VERY_HIGH_TIER: (u32, f64, f64) = (60, 1.5, 0.8);
pub const DEFAULT_HIGH_TIER: (u32, f64, f64) = (45, 2.0, 0.65);
pub const DEFAULT_MEDIUM_TIER: (u32, f64, f64) = (30, 2.5, 0.5);

// --- Growth ---
pub const DEFAULT_GROWTH_MAX_FACTOR: f64 = 1.5;
/// (upper age bound in months, multiplier increase per elapsed month).
pub const DEFAULT_GROWTH_BRACKETS: [(f64, f64); 3] = [(6.0, 0.05), (12.0, 0.03), (24.0, 0.015)];

// --- Seasonal ---
pub const DEFAULT_SEASONAL_MIN_FACTOR: f64 = 0.5;
pub const DEFAULT_SEASONAL_MAX_FACTOR: f64 = 1.5;
/// January through December. Summer heat raises fluid intake, winter lowers it.
pub const DEFAULT_MONTHLY_FACTORS: [f64; 12] = [
    0.95, 0.95, 0.98, 1.0, 1.02, 1.05, 1.08, 1.06, 1.0, 0.98, 0.96, 0.95,
];

// --- Size change ---
pub const DEFAULT_USAGE_WEIGHT: f64 = 0.6;
pub const DEFAULT_AGE_WEIGHT: f64 = 0.4;
pub const DEFAULT_USAGE_RATIO_SPAN: f64 = 0.5;
pub const DEFAULT_PROXIMITY_WINDOW_MONTHS: f64 = 2.0;
pub const DEFAULT_MIN_REPORTING_PROBABILITY: f64 = 0.1;
pub const DEFAULT_BASE_LEAD_DAYS: f64 = 3.0;
pub const DEFAULT_MIN_LEAD_DAYS: f64 = 1.0;
pub const DEFAULT_MAX_LEAD_DAYS: f64 = 60.0;

/// Diaper size table: label, age range in months, typical daily usage.
pub fn default_size_brackets() -> Vec<SizeBracket> {
    vec![
        SizeBracket::new("Newborn", 0.0, 1.0, 10.0),
        SizeBracket::new("Size 1", 1.0, 4.0, 8.0),
        SizeBracket::new("Size 2", 4.0, 8.0, 7.0),
        SizeBracket::new("Size 3", 8.0, 16.0, 6.0),
        SizeBracket::new("Size 4", 16.0, 28.0, 5.0),
        SizeBracket::new("Size 5", 28.0, 48.0, 4.5),
        SizeBracket::new("Size 6", 48.0, 72.0, 4.0),
    ]
}

// --- Reorder ---
pub const DEFAULT_LEAD_TIME_DAYS: u32 = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
