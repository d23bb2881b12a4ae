use chrono::{Datelike, NaiveDate};
use reorder_core::config::SeasonalConfig;

/// Seasonal adjustment factor per date.
///
/// Looks up the calendar month in `monthly_factors` (summer hydration raises
/// usage, winter lowers it).
///
/// Range: `min_factor` – `max_factor`, 0.5 – 1.5 by default.
pub fn seasonal_factors(dates: &[NaiveDate], config: &SeasonalConfig) -> Vec<f64> {
    dates.iter().map(|d| seasonal_factor(*d, config)).collect()
}

/// Seasonal factor for a single date.
pub fn seasonal_factor(date: NaiveDate, config: &SeasonalConfig) -> f64 {
    let raw = config.monthly_factors[date.month0() as usize];
    raw.clamp(config.min_factor, config.max_factor)
}
