use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::errors::AccessorError;
use crate::models::{ChildId, UsageRecord};

/// Read access to logged consumption events.
pub trait IUsageHistory: Send + Sync {
    /// All usage records for `child_id` with `from <= timestamp < until`.
    /// Order is not required; callers aggregate by day.
    fn usage_records(
        &self,
        child_id: ChildId,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<UsageRecord>, AccessorError>;
}

impl<T: IUsageHistory + ?Sized> IUsageHistory for Arc<T> {
    fn usage_records(
        &self,
        child_id: ChildId,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<UsageRecord>, AccessorError> {
        (**self).usage_records(child_id, from, until)
    }
}
