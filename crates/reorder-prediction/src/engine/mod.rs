//! PredictionEngine: loads a child's data, forecasts, adjusts, projects
//! runout and assembles the prediction record.

pub mod batch;
pub mod runout;

pub use batch::{BatchFailure, BatchReport, BatchRunner, CancellationFlag};
pub use runout::{project_runout, RunoutProjection};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reorder_core::config::ReorderConfig;
use reorder_core::errors::{ConfigError, ForecastError, PredictionError, PredictionResult};
use reorder_core::models::{
    ChildId, ChildProfile, ConfidenceLevel, ConsumptionPrediction, PredictionDraft,
    PredictionWarning,
};
use reorder_core::traits::{
    Clock, IChildProfiles, IInventory, IPredictionSink, IUsageHistory, SystemClock,
};
use reorder_factors::AdjustmentCurve;
use reorder_forecast::{ForecastOutput, Forecaster};
use tracing::{debug, info, warn};

use crate::confidence::ConfidenceScorer;
use crate::history::{HistoryWindow, UsageHistory};
use crate::observability::PredictionMetrics;
use crate::size_change::SizeChangePredictor;

/// The external systems the engine reads from and writes to.
#[derive(Clone)]
pub struct Collaborators {
    pub usage: Arc<dyn IUsageHistory>,
    pub inventory: Arc<dyn IInventory>,
    pub profiles: Arc<dyn IChildProfiles>,
    pub sink: Arc<dyn IPredictionSink>,
}

impl Collaborators {
    /// Use one store for every collaborator.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: IUsageHistory + IInventory + IChildProfiles + IPredictionSink + 'static,
    {
        Self {
            usage: store.clone(),
            inventory: store.clone(),
            profiles: store.clone(),
            sink: store,
        }
    }
}

/// Generates consumption predictions.
///
/// Holds configuration and shared collaborators only; one engine serves
/// any number of threads.
pub struct PredictionEngine {
    config: ReorderConfig,
    history: UsageHistory,
    inventory: Arc<dyn IInventory>,
    profiles: Arc<dyn IChildProfiles>,
    sink: Arc<dyn IPredictionSink>,
    forecaster: Forecaster,
    scorer: ConfidenceScorer,
    size_change: SizeChangePredictor,
    clock: Arc<dyn Clock>,
    metrics: Arc<PredictionMetrics>,
}

impl PredictionEngine {
    /// Create an engine on the system clock with its own metrics.
    /// Fails if `config` does not validate.
    pub fn new(config: ReorderConfig, collaborators: Collaborators) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            history: UsageHistory::new(collaborators.usage, config.history.clone()),
            inventory: collaborators.inventory,
            profiles: collaborators.profiles,
            sink: collaborators.sink,
            forecaster: Forecaster::new(config.forecast.clone()),
            scorer: ConfidenceScorer::new(config.confidence.clone()),
            size_change: SizeChangePredictor::new(config.size_change.clone()),
            clock: Arc::new(SystemClock),
            metrics: Arc::new(PredictionMetrics::new()),
            config,
        })
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<PredictionMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Arc<PredictionMetrics> {
        &self.metrics
    }

    /// Current time on the engine's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Predict at the clock's current time.
    pub fn generate_consumption_prediction(
        &self,
        child_id: ChildId,
        horizon_days: u32,
    ) -> PredictionResult<Arc<ConsumptionPrediction>> {
        self.generate_at(child_id, horizon_days, self.now())
    }

    /// Predict with the configured default horizon.
    pub fn generate_default(&self, child_id: ChildId) -> PredictionResult<Arc<ConsumptionPrediction>> {
        self.generate_consumption_prediction(child_id, self.config.forecast.default_horizon_days)
    }

    /// Predict as of `as_of`. Identical inputs give identical predictions
    /// apart from the record id and `supersedes`.
    pub fn generate_at(
        &self,
        child_id: ChildId,
        horizon_days: u32,
        as_of: DateTime<Utc>,
    ) -> PredictionResult<Arc<ConsumptionPrediction>> {
        let span = crate::prediction_span!(child_id, horizon_days);
        let _guard = span.enter();

        match self.predict(child_id, horizon_days, as_of) {
            Ok(prediction) => {
                self.metrics.record_prediction(&prediction);
                info!(
                    confidence = %prediction.confidence_level(),
                    model_version = prediction.model_version(),
                    runout = ?prediction.predicted_runout_date(),
                    warnings = prediction.warnings().len(),
                    "prediction generated"
                );
                Ok(prediction)
            }
            Err(e) => {
                self.metrics.record_failure();
                warn!(error = %e, "prediction failed");
                Err(e)
            }
        }
    }

    fn predict(
        &self,
        child_id: ChildId,
        horizon_days: u32,
        as_of: DateTime<Utc>,
    ) -> PredictionResult<Arc<ConsumptionPrediction>> {
        let max = self.config.forecast.max_horizon_days;
        if horizon_days == 0 || horizon_days > max {
            return Err(PredictionError::InvalidHorizon {
                horizon: horizon_days,
                max,
            });
        }

        let profile = self
            .profiles
            .child_profile(child_id)?
            .ok_or(PredictionError::ChildNotFound { child_id })?;

        let (history, inventory) = rayon::join(
            || self.history.load(child_id, as_of),
            || self.inventory.inventory_snapshot(child_id),
        );
        let history = history?;
        let inventory = inventory?;

        let mut draft = PredictionDraft::new(child_id, as_of, horizon_days);
        draft.lead_time_days = self.config.lead_time.lead_time_days;
        draft.quantity_on_hand = inventory.quantity_on_hand;
        draft.current_consumption_rate = history.consumption_rate;
        draft.training_data_points = history.distinct_days as u32;
        draft.training_period_days = history.series.len() as u32;

        let age_months = profile.age_in_months(as_of);
        let curve = AdjustmentCurve::build(
            age_months,
            as_of.date_naive(),
            horizon_days,
            &self.config.growth,
            &self.config.seasonal,
        );
        draft.growth_adjustment_factor = curve.mean_growth();
        draft.seasonal_adjustment_factor = curve.mean_seasonal();

        match self.forecast(&history, horizon_days) {
            Ok(output) => self.apply_forecast(&mut draft, &output, &curve, &profile, as_of),
            Err(e) => {
                debug!(error = %e, "forecast unavailable, degrading");
                draft.warnings.push(match e {
                    ForecastError::InsufficientData {
                        distinct_days,
                        required,
                    } => PredictionWarning::InsufficientHistory {
                        distinct_days,
                        required,
                    },
                    other => PredictionWarning::ModelFitFailed {
                        reason: other.to_string(),
                    },
                });
                draft.confidence_level = ConfidenceLevel::VeryLow;
            }
        }

        if let Some(runout) = draft.predicted_runout_date {
            if runout < as_of {
                draft.predicted_runout_date = None;
                draft.warnings.push(PredictionWarning::RunoutInPast);
            }
        }
        if let Some(runout) = draft.predicted_runout_date {
            let reorder = runout - chrono::Duration::days(i64::from(draft.lead_time_days));
            if reorder < as_of {
                draft.warnings.push(PredictionWarning::ReorderOverdue);
            }
        }

        draft.supersedes = self.sink.latest_prediction_id(child_id)?;
        let prediction = Arc::new(draft.build()?);
        self.sink.record(&prediction)?;
        Ok(prediction)
    }

    fn forecast(
        &self,
        history: &HistoryWindow,
        horizon_days: u32,
    ) -> Result<ForecastOutput, ForecastError> {
        if let Some(insufficient) = history.sufficiency.as_error() {
            return Err(insufficient);
        }
        let span = crate::forecast_span!(history.series.len(), horizon_days);
        let _guard = span.enter();

        let output = self.forecaster.fit_forecast(&history.series, horizon_days)?;
        if output.is_fallback() {
            self.metrics.record_fallback();
            debug!(
                model = output.model_version,
                reason = output.fallback_reason.as_deref().unwrap_or("not attempted"),
                "seasonal model not used"
            );
        }
        Ok(output)
    }

    fn apply_forecast(
        &self,
        draft: &mut PredictionDraft,
        output: &ForecastOutput,
        curve: &AdjustmentCurve,
        profile: &ChildProfile,
        as_of: DateTime<Utc>,
    ) {
        let stats = &output.statistics;
        draft.model_version = output.model_version.to_string();
        draft.mean_absolute_error = stats.mean_absolute_error;
        draft.r_squared_score = stats.r_squared;
        draft.training_data_points = stats.points;

        let adjusted = curve.apply(&output.daily);
        let total = adjusted.iter().sum::<f64>().round().max(0.0);
        draft.predicted_consumption_horizon = Some(total.min(f64::from(u32::MAX)) as u32);

        match project_runout(&adjusted, draft.quantity_on_hand, as_of) {
            RunoutProjection::At(at) => draft.predicted_runout_date = Some(at),
            RunoutProjection::NoConsumption => {
                draft.warnings.push(PredictionWarning::NoRecentConsumption)
            }
            RunoutProjection::BeyondRange => {}
        }

        let estimate = self.size_change.predict(
            profile.age_in_months(as_of),
            draft.current_consumption_rate,
            as_of,
        );
        draft.size_change_probability = estimate.probability;
        draft.predicted_new_size = estimate.next_size;
        draft.size_change_estimated_date = estimate.estimated_date;

        draft.confidence_level =
            self.scorer
                .score(stats.mean_absolute_error, stats.r_squared, stats.points);
    }
}
