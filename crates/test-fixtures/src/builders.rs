use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use reorder_core::constants::DAYS_PER_MONTH;
use reorder_core::models::{ChildId, ChildProfile, UsageRecord};

/// Weekly pattern averaging 6 units a day.
pub const STEADY_WEEK: [u32; 7] = [5, 6, 7, 6, 5, 7, 6];

/// Noon UTC on `date`.
pub fn at_noon(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
        .and_utc()
}

/// A prediction instant: midnight UTC at the start of `date`.
pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

/// One record per day at noon, starting on `first_day`. Zero quantities are
/// skipped.
pub fn daily_records(child_id: ChildId, first_day: NaiveDate, quantities: &[u32]) -> Vec<UsageRecord> {
    quantities
        .iter()
        .enumerate()
        .filter(|(_, q)| **q > 0)
        .map(|(i, q)| UsageRecord {
            child_id,
            timestamp: at_noon(first_day + Duration::days(i as i64)),
            quantity: *q,
        })
        .collect()
}

/// `days` days of `pattern` repeated, ending the day before `until`.
pub fn repeating_history(
    child_id: ChildId,
    until: NaiveDate,
    days: usize,
    pattern: &[u32],
) -> Vec<UsageRecord> {
    let first_day = until - Duration::days(days as i64);
    let quantities: Vec<u32> = (0..days).map(|i| pattern[i % pattern.len()]).collect();
    daily_records(child_id, first_day, &quantities)
}

/// A child who is `months` months old on `at`.
pub fn child_aged(child_id: ChildId, at: NaiveDate, months: f64) -> ChildProfile {
    let days = (months * DAYS_PER_MONTH).round() as i64;
    ChildProfile {
        child_id,
        date_of_birth: at - Duration::days(days),
    }
}
