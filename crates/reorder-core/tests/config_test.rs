use std::collections::HashMap;

use reorder_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = ReorderConfig::from_toml("").unwrap();

    // History defaults
    assert_eq!(config.history.lookback_days, 90);
    assert_eq!(config.history.min_distinct_days, 7);
    assert_eq!(config.history.rate_window_days, 14);

    // Forecast defaults
    assert_eq!(config.forecast.default_horizon_days, 30);
    assert_eq!(config.forecast.min_seasonal_points, 14);
    assert_eq!(config.forecast.max_training_points, 180);

    // Confidence defaults
    assert_eq!(config.confidence.very_low_min_points, 14);
    assert_eq!(config.confidence.very_low_mae, 4.0);
    assert_eq!(config.confidence.very_high, ConfidenceTier::new(60, 1.5, 0.8));
    assert_eq!(config.confidence.medium, ConfidenceTier::new(30, 2.5, 0.5));

    // Factor defaults
    assert_eq!(config.growth.max_factor, 1.5);
    assert_eq!(config.seasonal.monthly_factors.len(), 12);

    // Size change + reorder defaults
    assert_eq!(config.size_change.min_reporting_probability, 0.1);
    assert_eq!(config.size_change.brackets.first().unwrap().label, "Newborn");
    assert_eq!(config.lead_time.lead_time_days, 3);

    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[lead_time]
lead_time_days = 5

[confidence.very_high]
min_points = 90
max_mae = 1.0
min_r_squared = 0.9
"#;
    let config = ReorderConfig::from_toml(toml).unwrap();
    assert_eq!(config.lead_time.lead_time_days, 5);
    assert_eq!(config.confidence.very_high.min_points, 90);
    // Non-overridden fields keep defaults
    assert_eq!(config.confidence.high.min_points, 45);
    assert_eq!(config.history.lookback_days, 90);
    assert!(config.validate().is_ok());
}

#[test]
fn config_serde_roundtrip() {
    let config = ReorderConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = ReorderConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.size_change.brackets, config.size_change.brackets);
    assert_eq!(roundtripped.seasonal.monthly_factors, config.seasonal.monthly_factors);
}

#[test]
fn invalid_toml_reports_parse_error() {
    let err = ReorderConfig::from_toml("[lead_time\nlead_time_days = ").unwrap_err();
    assert!(matches!(err, reorder_core::errors::ConfigError::ParseError { .. }));
}

#[test]
fn from_toml_rejects_values_that_fail_validation() {
    let err = ReorderConfig::from_toml("[growth]\nmax_factor = 0.9").unwrap_err();
    assert!(matches!(
        err,
        reorder_core::errors::ConfigError::ValidationFailed { ref field, .. } if field == "growth.max_factor"
    ));
}

#[test]
fn env_overrides_take_precedence() {
    let vars: HashMap<&str, &str> = [
        ("REORDER_LEAD_TIME_DAYS", "7"),
        ("REORDER_HORIZON_DAYS", "14"),
        ("REORDER_LOG_LEVEL", "debug"),
        ("REORDER_LOOKBACK_DAYS", "not-a-number"),
    ]
    .into_iter()
    .collect();

    let mut config = ReorderConfig::default();
    config.apply_overrides_from(|k| vars.get(k).map(|v| v.to_string()));

    assert_eq!(config.lead_time.lead_time_days, 7);
    assert_eq!(config.forecast.default_horizon_days, 14);
    assert_eq!(config.observability.log_level, "debug");
    // Unparseable values are ignored.
    assert_eq!(config.history.lookback_days, 90);
}

#[test]
fn load_without_file_uses_defaults() {
    let config = ReorderConfig::load(Some(std::path::Path::new("/nonexistent/reorder.toml"))).unwrap();
    assert_eq!(config.forecast.max_horizon_days, 365);
}

#[test]
fn validation_rejects_out_of_order_confidence_tiers() {
    let mut config = ReorderConfig::default();
    config.confidence.high = ConfidenceTier::new(70, 2.0, 0.65);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("confidence.very_high"));
}

#[test]
fn validation_rejects_tier_looser_than_floor() {
    let mut config = ReorderConfig::default();
    config.confidence.medium = ConfidenceTier::new(30, 4.5, 0.5);
    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_overlapping_size_brackets() {
    let mut config = ReorderConfig::default();
    config.size_change.brackets[1].min_age_months = 0.5;
    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_horizon_beyond_cap() {
    let mut config = ReorderConfig::default();
    config.forecast.max_horizon_days = 400;
    assert!(config.validate().is_err());

    let mut config = ReorderConfig::default();
    config.forecast.default_horizon_days = 0;
    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_growth_cap_out_of_range() {
    let mut config = ReorderConfig::default();
    config.growth.max_factor = 0.9;
    assert!(config.validate().is_err());
}
