use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DAYS_PER_MONTH;

/// Identifier of a tracked child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildId(Uuid);

impl ChildId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random id.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ChildId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The slice of a child's profile the prediction engine needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildProfile {
    pub child_id: ChildId,
    pub date_of_birth: NaiveDate,
}

impl ChildProfile {
    /// Whole days since birth at `at`. Never negative.
    pub fn age_in_days(&self, at: DateTime<Utc>) -> i64 {
        (at.date_naive() - self.date_of_birth).num_days().max(0)
    }

    /// Fractional age in months at `at`.
    pub fn age_in_months(&self, at: DateTime<Utc>) -> f64 {
        self.age_in_days(at) as f64 / DAYS_PER_MONTH
    }
}
