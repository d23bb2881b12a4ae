//! Usage history accessor: reads a bounded window of usage records and
//! shapes it into a zero-filled daily series.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use reorder_core::config::HistoryConfig;
use reorder_core::errors::{AccessorError, ForecastError};
use reorder_core::models::ChildId;
use reorder_core::traits::IUsageHistory;
use reorder_forecast::{aggregate_daily, DailySeries};
use serde::Serialize;
use tracing::debug;

/// Whether a history window holds enough data to fit a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Sufficiency {
    Sufficient,
    Insufficient { distinct_days: usize, required: usize },
}

impl Sufficiency {
    pub fn is_sufficient(&self) -> bool {
        matches!(self, Self::Sufficient)
    }

    /// The insufficiency as a forecasting error, if there is one.
    pub fn as_error(&self) -> Option<ForecastError> {
        match *self {
            Self::Sufficient => None,
            Self::Insufficient {
                distinct_days,
                required,
            } => Some(ForecastError::InsufficientData {
                distinct_days,
                required,
            }),
        }
    }
}

/// A child's recent usage, ready for forecasting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryWindow {
    pub series: DailySeries,
    /// Days with at least one usage record.
    pub distinct_days: usize,
    pub sufficiency: Sufficiency,
    /// Mean daily usage over the trailing rate window (zero-filled days
    /// included). 0.0 with no history.
    pub consumption_rate: f64,
}

/// Reads usage history for one child at a time.
#[derive(Clone)]
pub struct UsageHistory {
    source: Arc<dyn IUsageHistory>,
    config: HistoryConfig,
}

impl UsageHistory {
    pub fn new(source: Arc<dyn IUsageHistory>, config: HistoryConfig) -> Self {
        Self { source, config }
    }

    /// Load the `lookback_days` complete days before the day of `as_of`.
    ///
    /// Usage already logged on the prediction day is left out, since that
    /// day is still in progress. The series runs from the first day with
    /// usage through the last complete day, so a child who stopped logging
    /// shows trailing zeros.
    pub fn load(&self, child_id: ChildId, as_of: DateTime<Utc>) -> Result<HistoryWindow, AccessorError> {
        let today = as_of.date_naive();
        let until = today.and_time(NaiveTime::MIN).and_utc();
        let from = until - Duration::days(i64::from(self.config.lookback_days));
        let records = self.source.usage_records(child_id, from, until)?;

        let daily = aggregate_daily(&records);
        let last_complete_day = today - Duration::days(1);
        let series = DailySeries::zero_filled(&daily, last_complete_day);

        let distinct_days = daily.len();
        let required = self.config.min_distinct_days;
        let sufficiency = if distinct_days >= required {
            Sufficiency::Sufficient
        } else {
            Sufficiency::Insufficient {
                distinct_days,
                required,
            }
        };
        let consumption_rate = series.trailing_mean(self.config.rate_window_days);

        debug!(
            %child_id,
            records = records.len(),
            distinct_days,
            series_days = series.len(),
            consumption_rate,
            "usage history loaded"
        );

        Ok(HistoryWindow {
            series,
            distinct_days,
            sufficiency,
            consumption_rate,
        })
    }
}
