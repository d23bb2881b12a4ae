//! Top-level engine configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    ConfidenceConfig, ForecastConfig, GrowthConfig, HistoryConfig, LeadTimeConfig,
    ObservabilityConfig, SeasonalConfig, SizeChangeConfig,
};
use crate::constants::MAX_HORIZON_DAYS;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`REORDER_*`)
/// 2. Config file passed to [`ReorderConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReorderConfig {
    pub history: HistoryConfig,
    pub forecast: ForecastConfig,
    pub confidence: ConfidenceConfig,
    pub growth: GrowthConfig,
    pub seasonal: SeasonalConfig,
    pub size_change: SizeChangeConfig,
    pub lead_time: LeadTimeConfig,
    pub observability: ObservabilityConfig,
}

impl ReorderConfig {
    /// Load configuration: defaults, then the TOML file at `path` if it
    /// exists, then environment overrides. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) if p.exists() => Self::from_file(p)?,
            _ => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string. Missing keys
    /// keep defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `REORDER_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup. Unparseable values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("REORDER_LEAD_TIME_DAYS").and_then(|s| s.parse().ok()) {
            self.lead_time.lead_time_days = v;
        }
        if let Some(v) = lookup("REORDER_HORIZON_DAYS").and_then(|s| s.parse().ok()) {
            self.forecast.default_horizon_days = v;
        }
        if let Some(v) = lookup("REORDER_LOOKBACK_DAYS").and_then(|s| s.parse().ok()) {
            self.history.lookback_days = v;
        }
        if let Some(v) = lookup("REORDER_LOG_LEVEL") {
            self.observability.log_level = v;
        }
        if let Some(v) = lookup("REORDER_JSON_LOGS").and_then(|s| s.parse().ok()) {
            self.observability.json_logs = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let h = &self.history;
        if h.lookback_days == 0 {
            return Err(ConfigError::invalid("history.lookback_days", "must be greater than 0"));
        }
        if h.min_distinct_days < 2 {
            return Err(ConfigError::invalid("history.min_distinct_days", "must be at least 2"));
        }
        if h.rate_window_days == 0 {
            return Err(ConfigError::invalid("history.rate_window_days", "must be greater than 0"));
        }

        let f = &self.forecast;
        if f.max_horizon_days == 0 || f.max_horizon_days > MAX_HORIZON_DAYS {
            return Err(ConfigError::invalid(
                "forecast.max_horizon_days",
                format!("must be between 1 and {MAX_HORIZON_DAYS}"),
            ));
        }
        if f.default_horizon_days == 0 || f.default_horizon_days > f.max_horizon_days {
            return Err(ConfigError::invalid(
                "forecast.default_horizon_days",
                "must be between 1 and forecast.max_horizon_days",
            ));
        }
        if f.moving_average_window == 0 {
            return Err(ConfigError::invalid("forecast.moving_average_window", "must be greater than 0"));
        }
        if f.min_seasonal_points < 2 * crate::constants::WEEKLY_PERIOD {
            return Err(ConfigError::invalid(
                "forecast.min_seasonal_points",
                "must cover at least two weekly cycles",
            ));
        }
        if f.max_training_points < f.min_seasonal_points {
            return Err(ConfigError::invalid(
                "forecast.max_training_points",
                "must be at least forecast.min_seasonal_points",
            ));
        }
        if !(f.interval_level > 0.0 && f.interval_level < 1.0) {
            return Err(ConfigError::invalid("forecast.interval_level", "must be in (0, 1)"));
        }

        self.validate_confidence()?;

        let g = &self.growth;
        if !(1.0..=2.0).contains(&g.max_factor) {
            return Err(ConfigError::invalid("growth.max_factor", "must be between 1.0 and 2.0"));
        }
        if g.brackets.iter().any(|b| !b.monthly_rate.is_finite() || b.monthly_rate < 0.0) {
            return Err(ConfigError::invalid("growth.brackets", "monthly_rate must be non-negative"));
        }
        if g.brackets.windows(2).any(|w| w[0].max_age_months >= w[1].max_age_months) {
            return Err(ConfigError::invalid("growth.brackets", "must be sorted by max_age_months"));
        }

        let s = &self.seasonal;
        if !(s.min_factor > 0.0 && s.min_factor <= 1.0 && s.max_factor >= 1.0) {
            return Err(ConfigError::invalid(
                "seasonal",
                "min_factor must be in (0, 1] and max_factor at least 1",
            ));
        }
        if s.monthly_factors.iter().any(|m| !m.is_finite() || *m <= 0.0) {
            return Err(ConfigError::invalid("seasonal.monthly_factors", "must be positive"));
        }

        self.validate_size_change()?;
        Ok(())
    }

    fn validate_confidence(&self) -> Result<(), ConfigError> {
        let c = &self.confidence;
        let tiers = [("very_high", c.very_high), ("high", c.high), ("medium", c.medium)];
        for (name, tier) in tiers {
            if tier.min_points < c.very_low_min_points
                || tier.max_mae >= c.very_low_mae
                || tier.min_r_squared < c.very_low_r_squared
            {
                return Err(ConfigError::invalid(
                    &format!("confidence.{name}"),
                    "must be stricter than the very_low floor",
                ));
            }
        }
        for pair in tiers.windows(2) {
            let (better_name, better) = pair[0];
            let (worse_name, worse) = pair[1];
            if better.min_points < worse.min_points
                || better.max_mae > worse.max_mae
                || better.min_r_squared < worse.min_r_squared
            {
                return Err(ConfigError::invalid(
                    &format!("confidence.{better_name}"),
                    format!("must be at least as strict as confidence.{worse_name}"),
                ));
            }
        }
        Ok(())
    }

    fn validate_size_change(&self) -> Result<(), ConfigError> {
        let sc = &self.size_change;
        if sc.brackets.is_empty() {
            return Err(ConfigError::invalid("size_change.brackets", "must not be empty"));
        }
        for b in &sc.brackets {
            if b.min_age_months >= b.max_age_months || b.expected_daily_usage <= 0.0 {
                return Err(ConfigError::invalid(
                    "size_change.brackets",
                    format!("bracket {} has an empty age range or no expected usage", b.label),
                ));
            }
        }
        if sc.brackets.windows(2).any(|w| w[0].max_age_months > w[1].min_age_months) {
            return Err(ConfigError::invalid("size_change.brackets", "age ranges must not overlap"));
        }
        if sc.usage_weight < 0.0 || sc.age_weight < 0.0 || sc.usage_weight + sc.age_weight <= 0.0 {
            return Err(ConfigError::invalid(
                "size_change",
                "usage_weight and age_weight must be non-negative and not both zero",
            ));
        }
        if sc.usage_ratio_span <= 0.0 || sc.proximity_window_months <= 0.0 {
            return Err(ConfigError::invalid(
                "size_change",
                "usage_ratio_span and proximity_window_months must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&sc.min_reporting_probability) || sc.min_reporting_probability == 0.0 {
            return Err(ConfigError::invalid(
                "size_change.min_reporting_probability",
                "must be in (0, 1]",
            ));
        }
        if !(sc.base_lead_days > 0.0
            && sc.min_lead_days >= 0.0
            && sc.min_lead_days <= sc.max_lead_days)
        {
            return Err(ConfigError::invalid(
                "size_change",
                "lead days must satisfy base > 0 and 0 <= min <= max",
            ));
        }
        Ok(())
    }
}
