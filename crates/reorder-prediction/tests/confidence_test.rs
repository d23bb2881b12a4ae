use proptest::prelude::*;
use reorder_core::config::ConfidenceConfig;
use reorder_core::models::ConfidenceLevel;
use reorder_prediction::confidence::score;
use reorder_prediction::ConfidenceScorer;

#[test]
fn tiers_with_default_thresholds() {
    let scorer = ConfidenceScorer::default();
    assert_eq!(scorer.score(Some(1.0), Some(0.9), 90), ConfidenceLevel::VeryHigh);
    assert_eq!(scorer.score(Some(1.8), Some(0.7), 50), ConfidenceLevel::High);
    assert_eq!(scorer.score(Some(2.4), Some(0.55), 35), ConfidenceLevel::Medium);
    assert_eq!(scorer.score(Some(3.0), Some(0.4), 20), ConfidenceLevel::Low);
    assert_eq!(scorer.score(Some(1.0), Some(0.9), 10), ConfidenceLevel::VeryLow);
}

#[test]
fn data_volume_caps_the_tier() {
    let scorer = ConfidenceScorer::default();
    // Excellent fit on 40 points is only Medium.
    assert_eq!(scorer.score(Some(0.5), Some(0.95), 40), ConfidenceLevel::Medium);
}

#[test]
fn floor_conditions() {
    let scorer = ConfidenceScorer::default();
    assert_eq!(scorer.score(Some(4.0), Some(0.9), 90), ConfidenceLevel::VeryLow);
    assert_eq!(scorer.score(Some(1.0), Some(0.29), 90), ConfidenceLevel::VeryLow);
}

#[test]
fn missing_statistics_are_worst_case() {
    let scorer = ConfidenceScorer::default();
    assert_eq!(scorer.score(None, Some(0.9), 90), ConfidenceLevel::VeryLow);
    assert_eq!(scorer.score(Some(0.0), None, 90), ConfidenceLevel::VeryLow);
    assert_eq!(scorer.score(Some(f64::NAN), Some(0.9), 90), ConfidenceLevel::VeryLow);
    assert_eq!(scorer.score(Some(1.0), Some(f64::NAN), 90), ConfidenceLevel::VeryLow);
}

fn maybe(v: f64, present: bool) -> Option<f64> {
    present.then_some(v)
}

proptest! {
    #[test]
    fn more_points_never_lower_confidence(
        mae in 0.0f64..6.0, has_mae in any::<bool>(),
        r2 in 0.0f64..=1.0, has_r2 in any::<bool>(),
        a in 0u32..200, b in 0u32..200,
    ) {
        let config = ConfidenceConfig::default();
        let (lo, hi) = (a.min(b), a.max(b));
        let (mae, r2) = (maybe(mae, has_mae), maybe(r2, has_r2));
        prop_assert!(score(mae, r2, lo, &config) <= score(mae, r2, hi, &config));
    }

    #[test]
    fn larger_error_never_raises_confidence(
        a in 0.0f64..6.0, b in 0.0f64..6.0,
        r2 in 0.0f64..=1.0, points in 0u32..200,
    ) {
        let config = ConfidenceConfig::default();
        let (small, large) = (a.min(b), a.max(b));
        prop_assert!(score(Some(large), Some(r2), points, &config) <= score(Some(small), Some(r2), points, &config));
        prop_assert!(score(None, Some(r2), points, &config) <= score(Some(large), Some(r2), points, &config));
    }

    #[test]
    fn lower_r_squared_never_raises_confidence(
        mae in 0.0f64..6.0, a in 0.0f64..=1.0, b in 0.0f64..=1.0, points in 0u32..200,
    ) {
        let config = ConfidenceConfig::default();
        let (low, high) = (a.min(b), a.max(b));
        prop_assert!(score(Some(mae), Some(low), points, &config) <= score(Some(mae), Some(high), points, &config));
        prop_assert!(score(Some(mae), None, points, &config) <= score(Some(mae), Some(low), points, &config));
    }
}
