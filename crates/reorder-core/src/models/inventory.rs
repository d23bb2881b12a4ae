use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ChildId;

/// On-hand stock of the child's current consumable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub child_id: ChildId,
    pub quantity_on_hand: u32,
    pub as_of: DateTime<Utc>,
}
