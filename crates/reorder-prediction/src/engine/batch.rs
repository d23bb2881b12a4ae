//! Batch prediction over many children.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use reorder_core::errors::PredictionError;
use reorder_core::models::{ChildId, ConsumptionPrediction};
use tracing::{info, warn};

use super::PredictionEngine;

/// Cooperative cancellation flag shared between a batch and whoever may
/// stop it. Children already in flight finish; the rest are skipped.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[derive(Debug)]
pub struct BatchFailure {
    pub child_id: ChildId,
    pub error: PredictionError,
}

/// Outcome of a batch run, in input order within each list.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub predictions: Vec<Arc<ConsumptionPrediction>>,
    pub failures: Vec<BatchFailure>,
    /// Children not started because the batch was cancelled.
    pub skipped: Vec<ChildId>,
    pub elapsed_ms: u64,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.predictions.len() + self.failures.len() + self.skipped.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.skipped.is_empty()
    }
}

enum Outcome {
    Done(Arc<ConsumptionPrediction>),
    Failed(PredictionError),
    Skipped,
}

/// Runs the engine over a list of children in parallel.
///
/// One child's failure never affects another's prediction.
pub struct BatchRunner {
    engine: Arc<PredictionEngine>,
    cancel: CancellationFlag,
}

impl BatchRunner {
    pub fn new(engine: Arc<PredictionEngine>) -> Self {
        Self {
            engine,
            cancel: CancellationFlag::new(),
        }
    }

    pub fn with_cancellation(mut self, cancel: CancellationFlag) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancellation(&self) -> &CancellationFlag {
        &self.cancel
    }

    /// Predict every child as of the engine clock's current time. The whole
    /// batch shares one prediction instant.
    pub fn run(&self, children: &[ChildId], horizon_days: u32) -> BatchReport {
        self.run_at(children, horizon_days, self.engine.now())
    }

    pub fn run_at(
        &self,
        children: &[ChildId],
        horizon_days: u32,
        as_of: DateTime<Utc>,
    ) -> BatchReport {
        let span = crate::batch_span!(children.len(), horizon_days);
        let _guard = span.enter();
        let started = Instant::now();

        let outcomes: Vec<(ChildId, Outcome)> = children
            .par_iter()
            .map(|&child_id| {
                if self.cancel.is_cancelled() {
                    return (child_id, Outcome::Skipped);
                }
                let outcome = match self.engine.generate_at(child_id, horizon_days, as_of) {
                    Ok(p) => Outcome::Done(p),
                    Err(e) => Outcome::Failed(e),
                };
                (child_id, outcome)
            })
            .collect();

        let mut report = BatchReport::default();
        for (child_id, outcome) in outcomes {
            match outcome {
                Outcome::Done(p) => report.predictions.push(p),
                Outcome::Failed(error) => report.failures.push(BatchFailure { child_id, error }),
                Outcome::Skipped => report.skipped.push(child_id),
            }
        }
        report.elapsed_ms = started.elapsed().as_millis() as u64;

        if report.skipped.is_empty() {
            info!(
                generated = report.predictions.len(),
                failed = report.failures.len(),
                elapsed_ms = report.elapsed_ms,
                "batch finished"
            );
        } else {
            warn!(
                generated = report.predictions.len(),
                failed = report.failures.len(),
                skipped = report.skipped.len(),
                "batch cancelled"
            );
        }
        report
    }
}
