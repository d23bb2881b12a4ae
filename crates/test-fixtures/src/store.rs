use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use reorder_core::errors::AccessorError;
use reorder_core::models::{
    ChildId, ChildProfile, ConsumptionPrediction, InventorySnapshot, UsageRecord,
};
use reorder_core::traits::{IChildProfiles, IInventory, IPredictionSink, IUsageHistory};
use uuid::Uuid;

/// In-memory implementation of every collaborator the engine reads or writes.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    usage: DashMap<ChildId, Vec<UsageRecord>>,
    inventory: DashMap<ChildId, InventorySnapshot>,
    profiles: DashMap<ChildId, ChildProfile>,
    predictions: DashMap<ChildId, Vec<ConsumptionPrediction>>,
    usage_queries: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_child(&self, profile: ChildProfile) {
        self.profiles.insert(profile.child_id, profile);
    }

    pub fn add_usage(&self, records: impl IntoIterator<Item = UsageRecord>) {
        for record in records {
            self.usage.entry(record.child_id).or_default().push(record);
        }
    }

    pub fn set_on_hand(&self, child_id: ChildId, quantity: u32, as_of: DateTime<Utc>) {
        self.inventory.insert(
            child_id,
            InventorySnapshot {
                child_id,
                quantity_on_hand: quantity,
                as_of,
            },
        );
    }

    /// Predictions recorded for `child_id`, oldest first.
    pub fn predictions_for(&self, child_id: ChildId) -> Vec<ConsumptionPrediction> {
        self.predictions
            .get(&child_id)
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    pub fn prediction_count(&self) -> usize {
        self.predictions.iter().map(|e| e.value().len()).sum()
    }

    /// How many times usage history has been queried.
    pub fn usage_queries(&self) -> usize {
        self.usage_queries.load(Ordering::Relaxed)
    }
}

impl IUsageHistory for InMemoryStore {
    fn usage_records(
        &self,
        child_id: ChildId,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<UsageRecord>, AccessorError> {
        self.usage_queries.fetch_add(1, Ordering::Relaxed);
        Ok(self
            .usage
            .get(&child_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.timestamp >= from && r.timestamp < until)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

impl IInventory for InMemoryStore {
    fn inventory_snapshot(&self, child_id: ChildId) -> Result<InventorySnapshot, AccessorError> {
        Ok(self
            .inventory
            .get(&child_id)
            .map(|s| s.clone())
            .unwrap_or(InventorySnapshot {
                child_id,
                quantity_on_hand: 0,
                as_of: DateTime::<Utc>::UNIX_EPOCH,
            }))
    }
}

impl IChildProfiles for InMemoryStore {
    fn child_profile(&self, child_id: ChildId) -> Result<Option<ChildProfile>, AccessorError> {
        Ok(self.profiles.get(&child_id).map(|p| p.clone()))
    }
}

impl IPredictionSink for InMemoryStore {
    fn record(&self, prediction: &ConsumptionPrediction) -> Result<(), AccessorError> {
        self.predictions
            .entry(prediction.child_id())
            .or_default()
            .push(prediction.clone());
        Ok(())
    }

    fn latest_prediction_id(&self, child_id: ChildId) -> Result<Option<Uuid>, AccessorError> {
        Ok(self
            .predictions
            .get(&child_id)
            .and_then(|p| p.last().map(|p| p.id())))
    }
}

/// Usage history that is always unreachable.
#[derive(Debug, Default)]
pub struct FailingHistory;

impl IUsageHistory for FailingHistory {
    fn usage_records(
        &self,
        _child_id: ChildId,
        _from: DateTime<Utc>,
        _until: DateTime<Utc>,
    ) -> Result<Vec<UsageRecord>, AccessorError> {
        Err(AccessorError::unreachable(
            "usage history",
            "connection refused",
        ))
    }
}

/// Inventory that fails every query.
#[derive(Debug, Default)]
pub struct FailingInventory;

impl IInventory for FailingInventory {
    fn inventory_snapshot(&self, _child_id: ChildId) -> Result<InventorySnapshot, AccessorError> {
        Err(AccessorError::query("inventory", "statement timeout"))
    }
}
