pub mod growth;
pub mod seasonal;

use chrono::{Duration, NaiveDate};

/// The `horizon_days` consecutive calendar dates starting at `start`.
pub fn horizon_dates(start: NaiveDate, horizon_days: u32) -> Vec<NaiveDate> {
    (0..i64::from(horizon_days))
        .map(|d| start + Duration::days(d))
        .collect()
}
