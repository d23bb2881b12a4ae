use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ChildId, ConfidenceLevel};
use crate::constants::SECONDS_PER_DAY;
use crate::errors::PredictionError;

/// Data-quality flags attached to a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredictionWarning {
    /// Too few days with logged usage to fit a model.
    InsufficientHistory { distinct_days: usize, required: usize },
    /// The forecasting model could not be fit.
    ModelFitFailed { reason: String },
    /// The child has not consumed anything recently, so no runout is projected.
    NoRecentConsumption,
    /// The projected runout fell before the prediction date and was dropped.
    RunoutInPast,
    /// The recommended reorder date is already behind the prediction date.
    ReorderOverdue,
}

impl PredictionWarning {
    /// Whether this warning means the forecast itself is missing.
    pub fn is_degrading(&self) -> bool {
        matches!(
            self,
            Self::InsufficientHistory { .. } | Self::ModelFitFailed { .. }
        )
    }
}

/// Mutable staging area for a prediction.
///
/// The orchestrator fills a draft step by step and then calls
/// [`PredictionDraft::build`], which checks every record invariant and
/// produces the immutable [`ConsumptionPrediction`].
#[derive(Debug, Clone)]
pub struct PredictionDraft {
    pub child_id: ChildId,
    pub model_version: String,
    pub prediction_date: DateTime<Utc>,
    pub prediction_horizon_days: u32,
    pub confidence_level: ConfidenceLevel,
    pub mean_absolute_error: Option<f64>,
    pub r_squared_score: Option<f64>,
    pub current_consumption_rate: f64,
    pub predicted_consumption_horizon: Option<u32>,
    pub predicted_runout_date: Option<DateTime<Utc>>,
    pub lead_time_days: u32,
    pub size_change_probability: Option<f64>,
    pub predicted_new_size: Option<String>,
    pub size_change_estimated_date: Option<DateTime<Utc>>,
    pub growth_adjustment_factor: f64,
    pub seasonal_adjustment_factor: f64,
    pub training_data_points: u32,
    pub training_period_days: u32,
    pub quantity_on_hand: u32,
    pub warnings: Vec<PredictionWarning>,
    pub supersedes: Option<Uuid>,
}

impl PredictionDraft {
    /// Start a draft with every forecast-dependent field empty and
    /// confidence at the floor.
    pub fn new(child_id: ChildId, prediction_date: DateTime<Utc>, horizon_days: u32) -> Self {
        Self {
            child_id,
            model_version: crate::constants::model_versions::NONE.to_string(),
            prediction_date,
            prediction_horizon_days: horizon_days,
            confidence_level: ConfidenceLevel::VeryLow,
            mean_absolute_error: None,
            r_squared_score: None,
            current_consumption_rate: 0.0,
            predicted_consumption_horizon: None,
            predicted_runout_date: None,
            lead_time_days: 0,
            size_change_probability: None,
            predicted_new_size: None,
            size_change_estimated_date: None,
            growth_adjustment_factor: 1.0,
            seasonal_adjustment_factor: 1.0,
            training_data_points: 0,
            training_period_days: 0,
            quantity_on_hand: 0,
            warnings: Vec::new(),
            supersedes: None,
        }
    }

    /// Validate the draft and freeze it into a prediction.
    pub fn build(self) -> Result<ConsumptionPrediction, PredictionError> {
        self.freeze(Uuid::new_v4())
    }

    fn freeze(self, id: Uuid) -> Result<ConsumptionPrediction, PredictionError> {
        if self.prediction_horizon_days == 0 {
            return Err(invariant("prediction horizon must be at least one day"));
        }
        if !self.current_consumption_rate.is_finite() || self.current_consumption_rate < 0.0 {
            return Err(invariant(format!(
                "consumption rate {} is not a non-negative number",
                self.current_consumption_rate
            )));
        }
        if let Some(mae) = self.mean_absolute_error {
            if !mae.is_finite() || mae < 0.0 {
                return Err(invariant(format!("mean absolute error {mae} out of range")));
            }
        }
        if let Some(r2) = self.r_squared_score {
            if !(0.0..=1.0).contains(&r2) {
                return Err(invariant(format!("r squared {r2} outside [0, 1]")));
            }
        }
        for (name, factor) in [
            ("growth_adjustment_factor", self.growth_adjustment_factor),
            ("seasonal_adjustment_factor", self.seasonal_adjustment_factor),
        ] {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(invariant(format!("{name} {factor} must be positive")));
            }
        }

        if let Some(runout) = self.predicted_runout_date {
            if runout < self.prediction_date {
                return Err(invariant(format!(
                    "runout {runout} precedes prediction date {}",
                    self.prediction_date
                )));
            }
        }
        let recommended_reorder_date = self
            .predicted_runout_date
            .map(|runout| runout - Duration::days(i64::from(self.lead_time_days)));

        let size_fields = [
            self.size_change_probability.is_some(),
            self.predicted_new_size.is_some(),
            self.size_change_estimated_date.is_some(),
        ];
        if size_fields.iter().any(|s| *s) && !size_fields.iter().all(|s| *s) {
            return Err(invariant(
                "size change probability, size and date must be reported together",
            ));
        }
        if let Some(p) = self.size_change_probability {
            if !(0.0..=1.0).contains(&p) {
                return Err(invariant(format!("size change probability {p} outside [0, 1]")));
            }
        }

        Ok(ConsumptionPrediction {
            id,
            child_id: self.child_id,
            model_version: self.model_version,
            prediction_date: self.prediction_date,
            prediction_horizon_days: self.prediction_horizon_days,
            confidence_level: self.confidence_level,
            mean_absolute_error: self.mean_absolute_error,
            r_squared_score: self.r_squared_score,
            current_consumption_rate: self.current_consumption_rate,
            predicted_consumption_horizon: self.predicted_consumption_horizon,
            predicted_runout_date: self.predicted_runout_date,
            recommended_reorder_date,
            lead_time_days: self.lead_time_days,
            size_change_probability: self.size_change_probability,
            predicted_new_size: self.predicted_new_size,
            size_change_estimated_date: self.size_change_estimated_date,
            growth_adjustment_factor: self.growth_adjustment_factor,
            seasonal_adjustment_factor: self.seasonal_adjustment_factor,
            training_data_points: self.training_data_points,
            training_period_days: self.training_period_days,
            quantity_on_hand: self.quantity_on_hand,
            warnings: self.warnings,
            supersedes: self.supersedes,
        })
    }
}

fn invariant(reason: impl Into<String>) -> PredictionError {
    PredictionError::Invariant {
        reason: reason.into(),
    }
}

/// A consumption forecast and reorder recommendation for one child.
///
/// Immutable once built. Corrections are new predictions whose
/// `supersedes` points at the record they replace. Deserializing runs the
/// same checks as [`PredictionDraft::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredPrediction")]
pub struct ConsumptionPrediction {
    id: Uuid,
    child_id: ChildId,
    model_version: String,
    prediction_date: DateTime<Utc>,
    prediction_horizon_days: u32,
    confidence_level: ConfidenceLevel,
    mean_absolute_error: Option<f64>,
    r_squared_score: Option<f64>,
    current_consumption_rate: f64,
    predicted_consumption_horizon: Option<u32>,
    predicted_runout_date: Option<DateTime<Utc>>,
    recommended_reorder_date: Option<DateTime<Utc>>,
    lead_time_days: u32,
    size_change_probability: Option<f64>,
    predicted_new_size: Option<String>,
    size_change_estimated_date: Option<DateTime<Utc>>,
    growth_adjustment_factor: f64,
    seasonal_adjustment_factor: f64,
    training_data_points: u32,
    training_period_days: u32,
    quantity_on_hand: u32,
    warnings: Vec<PredictionWarning>,
    supersedes: Option<Uuid>,
}

impl ConsumptionPrediction {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn child_id(&self) -> ChildId {
        self.child_id
    }

    pub fn model_version(&self) -> &str {
        &self.model_version
    }

    pub fn prediction_date(&self) -> DateTime<Utc> {
        self.prediction_date
    }

    pub fn prediction_horizon_days(&self) -> u32 {
        self.prediction_horizon_days
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.confidence_level
    }

    pub fn mean_absolute_error(&self) -> Option<f64> {
        self.mean_absolute_error
    }

    pub fn r_squared_score(&self) -> Option<f64> {
        self.r_squared_score
    }

    pub fn current_consumption_rate(&self) -> f64 {
        self.current_consumption_rate
    }

    pub fn predicted_consumption_horizon(&self) -> Option<u32> {
        self.predicted_consumption_horizon
    }

    pub fn predicted_runout_date(&self) -> Option<DateTime<Utc>> {
        self.predicted_runout_date
    }

    pub fn recommended_reorder_date(&self) -> Option<DateTime<Utc>> {
        self.recommended_reorder_date
    }

    pub fn lead_time_days(&self) -> u32 {
        self.lead_time_days
    }

    pub fn size_change_probability(&self) -> Option<f64> {
        self.size_change_probability
    }

    pub fn predicted_new_size(&self) -> Option<&str> {
        self.predicted_new_size.as_deref()
    }

    pub fn size_change_estimated_date(&self) -> Option<DateTime<Utc>> {
        self.size_change_estimated_date
    }

    pub fn growth_adjustment_factor(&self) -> f64 {
        self.growth_adjustment_factor
    }

    pub fn seasonal_adjustment_factor(&self) -> f64 {
        self.seasonal_adjustment_factor
    }

    pub fn training_data_points(&self) -> u32 {
        self.training_data_points
    }

    pub fn training_period_days(&self) -> u32 {
        self.training_period_days
    }

    pub fn quantity_on_hand(&self) -> u32 {
        self.quantity_on_hand
    }

    pub fn warnings(&self) -> &[PredictionWarning] {
        &self.warnings
    }

    pub fn supersedes(&self) -> Option<Uuid> {
        self.supersedes
    }

    /// True when no forecast could be produced for this prediction.
    pub fn is_degraded(&self) -> bool {
        self.warnings.iter().any(PredictionWarning::is_degrading)
    }

    /// Fractional days from the prediction date to runout.
    pub fn days_until_runout(&self) -> Option<f64> {
        self.predicted_runout_date
            .map(|r| (r - self.prediction_date).num_seconds() as f64 / SECONDS_PER_DAY as f64)
    }
}

/// Serialized shape of a [`ConsumptionPrediction`], validated on the way in.
#[derive(Deserialize)]
struct StoredPrediction {
    id: Uuid,
    child_id: ChildId,
    model_version: String,
    prediction_date: DateTime<Utc>,
    prediction_horizon_days: u32,
    confidence_level: ConfidenceLevel,
    mean_absolute_error: Option<f64>,
    r_squared_score: Option<f64>,
    current_consumption_rate: f64,
    predicted_consumption_horizon: Option<u32>,
    predicted_runout_date: Option<DateTime<Utc>>,
    recommended_reorder_date: Option<DateTime<Utc>>,
    lead_time_days: u32,
    size_change_probability: Option<f64>,
    predicted_new_size: Option<String>,
    size_change_estimated_date: Option<DateTime<Utc>>,
    growth_adjustment_factor: f64,
    seasonal_adjustment_factor: f64,
    training_data_points: u32,
    training_period_days: u32,
    quantity_on_hand: u32,
    warnings: Vec<PredictionWarning>,
    supersedes: Option<Uuid>,
}

impl TryFrom<StoredPrediction> for ConsumptionPrediction {
    type Error = PredictionError;

    fn try_from(stored: StoredPrediction) -> Result<Self, Self::Error> {
        let draft = PredictionDraft {
            child_id: stored.child_id,
            model_version: stored.model_version,
            prediction_date: stored.prediction_date,
            prediction_horizon_days: stored.prediction_horizon_days,
            confidence_level: stored.confidence_level,
            mean_absolute_error: stored.mean_absolute_error,
            r_squared_score: stored.r_squared_score,
            current_consumption_rate: stored.current_consumption_rate,
            predicted_consumption_horizon: stored.predicted_consumption_horizon,
            predicted_runout_date: stored.predicted_runout_date,
            lead_time_days: stored.lead_time_days,
            size_change_probability: stored.size_change_probability,
            predicted_new_size: stored.predicted_new_size,
            size_change_estimated_date: stored.size_change_estimated_date,
            growth_adjustment_factor: stored.growth_adjustment_factor,
            seasonal_adjustment_factor: stored.seasonal_adjustment_factor,
            training_data_points: stored.training_data_points,
            training_period_days: stored.training_period_days,
            quantity_on_hand: stored.quantity_on_hand,
            warnings: stored.warnings,
            supersedes: stored.supersedes,
        };
        let prediction = draft.freeze(stored.id)?;
        if prediction.recommended_reorder_date != stored.recommended_reorder_date {
            return Err(invariant(
                "recommended reorder date must be runout minus lead time",
            ));
        }
        Ok(prediction)
    }
}
