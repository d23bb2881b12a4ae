use serde::{Deserialize, Serialize};

use super::defaults;

/// Reorder timing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadTimeConfig {
    /// Safety margin subtracted from the runout date.
    pub lead_time_days: u32,
}

impl Default for LeadTimeConfig {
    fn default() -> Self {
        Self {
            lead_time_days: defaults::DEFAULT_LEAD_TIME_DAYS,
        }
    }
}
