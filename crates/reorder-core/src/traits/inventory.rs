use std::sync::Arc;

use crate::errors::AccessorError;
use crate::models::{ChildId, InventorySnapshot};

/// Read access to current on-hand stock.
pub trait IInventory: Send + Sync {
    /// Current stock for the child's active product. A child with no
    /// inventory rows has zero on hand, not an error.
    fn inventory_snapshot(&self, child_id: ChildId) -> Result<InventorySnapshot, AccessorError>;
}

impl<T: IInventory + ?Sized> IInventory for Arc<T> {
    fn inventory_snapshot(&self, child_id: ChildId) -> Result<InventorySnapshot, AccessorError> {
        (**self).inventory_snapshot(child_id)
    }
}
