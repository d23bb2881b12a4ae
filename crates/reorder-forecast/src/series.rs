use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use reorder_core::models::{DailyUsage, UsageRecord};
use serde::Serialize;

/// Sum usage records per UTC calendar day, ordered by date.
/// Days without records are absent; zero-quantity records are ignored.
pub fn aggregate_daily(records: &[UsageRecord]) -> Vec<DailyUsage> {
    let mut by_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for record in records.iter().filter(|r| r.quantity > 0) {
        let day = by_day.entry(record.timestamp.date_naive()).or_insert(0);
        *day = day.saturating_add(record.quantity);
    }
    by_day
        .into_iter()
        .map(|(date, quantity)| DailyUsage { date, quantity })
        .collect()
}

/// One usage value per consecutive calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    start: Option<NaiveDate>,
    values: Vec<f64>,
}

impl DailySeries {
    pub fn empty() -> Self {
        Self {
            start: None,
            values: Vec::new(),
        }
    }

    /// A series of `values` whose first day is `start`.
    pub fn new(start: NaiveDate, values: Vec<f64>) -> Self {
        if values.is_empty() {
            return Self::empty();
        }
        Self {
            start: Some(start),
            values,
        }
    }

    /// Zero-filled series from the first day with usage through the later of
    /// the last day with usage and `through`.
    ///
    /// `daily` must be sorted by date (as returned by [`aggregate_daily`]).
    pub fn zero_filled(daily: &[DailyUsage], through: NaiveDate) -> Self {
        let Some(first) = daily.first() else {
            return Self::empty();
        };
        let last_usage = daily.last().map(|d| d.date).unwrap_or(first.date);
        let end = last_usage.max(through);
        let len = (end - first.date).num_days() + 1;

        let mut values = vec![0.0; len as usize];
        for d in daily {
            let idx = (d.date - first.date).num_days() as usize;
            values[idx] += f64::from(d.quantity);
        }
        Self::new(first.date, values)
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Last day covered by the series.
    pub fn end(&self) -> Option<NaiveDate> {
        self.start
            .map(|s| s + Duration::days(self.values.len() as i64 - 1))
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of days with non-zero usage.
    pub fn days_with_usage(&self) -> usize {
        self.values.iter().filter(|v| **v > 0.0).count()
    }

    /// The most recent `n` days (the whole series when shorter).
    pub fn tail(&self, n: usize) -> DailySeries {
        if n >= self.values.len() {
            return self.clone();
        }
        let skip = self.values.len() - n;
        match self.start {
            Some(start) => {
                DailySeries::new(start + Duration::days(skip as i64), self.values[skip..].to_vec())
            }
            None => DailySeries::empty(),
        }
    }

    /// Mean of the most recent `window` days, 0.0 for an empty series.
    pub fn trailing_mean(&self, window: usize) -> f64 {
        let tail = &self.values[self.values.len().saturating_sub(window)..];
        if tail.is_empty() {
            0.0
        } else {
            tail.iter().sum::<f64>() / tail.len() as f64
        }
    }
}
