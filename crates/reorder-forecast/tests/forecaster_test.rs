use chrono::NaiveDate;
use reorder_core::config::ForecastConfig;
use reorder_core::constants::model_versions;
use reorder_core::errors::ForecastError;
use reorder_forecast::{DailySeries, Forecaster};

const WEEKLY: [f64; 7] = [5.0, 6.0, 7.0, 6.0, 5.0, 7.0, 6.0];

fn series(values: Vec<f64>) -> DailySeries {
    DailySeries::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), values)
}

fn weekly(days: usize) -> DailySeries {
    series((0..days).map(|t| WEEKLY[t % 7]).collect())
}

#[test]
fn zero_horizon_rejected() {
    let err = Forecaster::default().fit_forecast(&weekly(30), 0).unwrap_err();
    assert_eq!(err, ForecastError::InvalidHorizon { horizon: 0 });
}

#[test]
fn single_usage_day_cannot_be_fit() {
    let err = Forecaster::default()
        .fit_forecast(&series(vec![0.0, 0.0, 6.0, 0.0]), 7)
        .unwrap_err();
    assert!(matches!(err, ForecastError::ModelFit { .. }));
}

#[test]
fn zero_variance_uses_constant_level() {
    let out = Forecaster::default().fit_forecast(&series(vec![5.0; 30]), 30).unwrap();
    assert_eq!(out.model_version, model_versions::CONSTANT);
    assert_eq!(out.statistics.r_squared, None);
    assert_eq!(out.statistics.mean_absolute_error, Some(0.0));
    assert_eq!(out.statistics.points, 30);
    assert!(out.daily.iter().all(|v| *v == 5.0));
    assert_eq!(out.predicted_total, 150);
    assert!(out.is_fallback());
    assert_eq!(out.fallback_reason, None);
}

#[test]
fn weekly_pattern_fits_well() {
    let out = Forecaster::default().fit_forecast(&weekly(90), 30).unwrap();
    assert!(
        out.model_version == model_versions::MSTL_ETS
            || out.model_version == model_versions::ADDITIVE_DECOMPOSITION,
        "unexpected method {}",
        out.model_version
    );
    assert_eq!(out.daily.len(), 30);
    assert_eq!(out.statistics.points, 90);
    let mae = out.statistics.mean_absolute_error.unwrap();
    let r2 = out.statistics.r_squared.unwrap();
    assert!(mae < 1.5, "mae {mae}");
    assert!(r2 > 0.8, "r2 {r2}");
    // A reason is recorded only when the seasonal model was tried and rejected.
    assert_eq!(out.fallback_reason.is_some(), out.is_fallback());
    // 30 days at a mean of 6/day.
    assert!((150..=210).contains(&out.predicted_total), "total {}", out.predicted_total);
}

#[test]
fn short_history_uses_moving_average() {
    let values = vec![4.0, 6.0, 5.0, 7.0, 6.0, 8.0, 7.0, 9.0, 8.0, 10.0];
    let out = Forecaster::default().fit_forecast(&series(values), 10).unwrap();
    assert_eq!(out.model_version, model_versions::MOVING_AVERAGE);
    // Trailing 7-day mean: (7+6+8+7+9+8+10)/7 = 55/7.
    let level = 55.0 / 7.0;
    assert!(out.daily.iter().all(|v| (v - level).abs() < 1e-9));
    assert_eq!(out.predicted_total, (level * 10.0).round() as u32);
    assert_eq!(out.statistics.points, 10);
    assert!(out.statistics.mean_absolute_error.is_some());
    // Too short for the seasonal model, so it was never tried.
    assert_eq!(out.fallback_reason, None);
}

#[test]
fn only_recent_days_are_fit() {
    let config = ForecastConfig {
        max_training_points: 60,
        ..ForecastConfig::default()
    };
    let out = Forecaster::new(config).fit_forecast(&weekly(200), 14).unwrap();
    assert_eq!(out.statistics.points, 60);
}

#[test]
fn declining_usage_never_forecasts_negative() {
    let values: Vec<f64> = (0..28).map(|t| (27 - t) as f64 * 0.5).collect();
    let out = Forecaster::default().fit_forecast(&series(values), 120).unwrap();
    assert_eq!(out.daily.len(), 120);
    assert!(out.daily.iter().all(|v| *v >= 0.0 && v.is_finite()));
    if let Some((lower, upper)) = &out.interval {
        assert!(lower.iter().chain(upper).all(|v| *v >= 0.0));
    }
}

#[test]
fn forecasting_is_deterministic() {
    let forecaster = Forecaster::default();
    let a = forecaster.fit_forecast(&weekly(60), 30).unwrap();
    let b = forecaster.fit_forecast(&weekly(60), 30).unwrap();
    assert_eq!(a, b);
}
