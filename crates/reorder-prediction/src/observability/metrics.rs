//! Prediction counters.
//!
//! Constructed explicitly and shared through an `Arc`; there is no global
//! registry. Counters are relaxed atomics, so a snapshot taken during a
//! batch may be mid-update across fields but each counter is exact.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use reorder_core::models::{ConfidenceLevel, ConsumptionPrediction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct PredictionMetrics {
    generated: AtomicU64,
    degraded: AtomicU64,
    failures: AtomicU64,
    fallbacks: AtomicU64,
    by_confidence: [AtomicU64; 5],
}

/// Point-in-time copy of [`PredictionMetrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub generated: u64,
    pub degraded: u64,
    pub failures: u64,
    /// Forecasts produced by a method other than the seasonal model.
    pub fallbacks: u64,
    pub by_confidence: BTreeMap<String, u64>,
}

impl PredictionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a prediction that was returned to the caller.
    pub fn record_prediction(&self, prediction: &ConsumptionPrediction) {
        self.generated.fetch_add(1, Ordering::Relaxed);
        if prediction.is_degraded() {
            self.degraded.fetch_add(1, Ordering::Relaxed);
        }
        self.by_confidence[prediction.confidence_level().index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let by_confidence = ConfidenceLevel::ALL
            .iter()
            .map(|level| {
                (
                    level.as_str().to_string(),
                    self.by_confidence[level.index()].load(Ordering::Relaxed),
                )
            })
            .collect();
        MetricsSnapshot {
            generated: self.generated.load(Ordering::Relaxed),
            degraded: self.degraded.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
            by_confidence,
        }
    }

    /// Zero every counter (useful for testing or periodic rotation).
    pub fn reset(&self) {
        for counter in [&self.generated, &self.degraded, &self.failures, &self.fallbacks]
            .into_iter()
            .chain(self.by_confidence.iter())
        {
            counter.store(0, Ordering::Relaxed);
        }
    }
}
