use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ChildId;

/// A single logged consumption event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub child_id: ChildId,
    pub timestamp: DateTime<Utc>,
    /// Units consumed. Records with zero quantity are ignored by aggregation.
    pub quantity: u32,
}

/// Total consumption for one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyUsage {
    pub date: NaiveDate,
    pub quantity: u32,
}
