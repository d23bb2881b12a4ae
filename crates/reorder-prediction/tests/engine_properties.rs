use std::sync::Arc;

use chrono::Duration;
use proptest::prelude::*;
use reorder_core::config::ReorderConfig;
use reorder_core::models::{ChildId, ConfidenceLevel};
use reorder_prediction::{Collaborators, PredictionEngine};
use test_fixtures::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn runout_and_reorder_hold_their_invariants(
        quantities in prop::collection::vec(0u32..15, 1..13),
        on_hand in 0u32..200,
        lead in 0u32..10,
        horizon in 1u32..=90,
        age in 0.0f64..60.0,
    ) {
        let today = date(2025, 8, 15);
        let store = Arc::new(InMemoryStore::new());
        let child = ChildId::random();
        store.add_child(child_aged(child, today, age));
        store.add_usage(daily_records(child, today - Duration::days(quantities.len() as i64), &quantities));
        store.set_on_hand(child, on_hand, midnight(today));

        let mut config = ReorderConfig::default();
        config.lead_time.lead_time_days = lead;
        let engine = PredictionEngine::new(config, Collaborators::from_store(store.clone()))
        .unwrap();
        let p = engine.generate_at(child, horizon, midnight(today)).unwrap();

        if let Some(runout) = p.predicted_runout_date() {
            prop_assert!(runout >= p.prediction_date());
            prop_assert_eq!(p.recommended_reorder_date(), Some(runout - Duration::days(i64::from(lead))));
        } else {
            prop_assert_eq!(p.recommended_reorder_date(), None);
        }

        let usage_days = quantities.iter().filter(|q| **q > 0).count();
        if usage_days < 7 {
            prop_assert_eq!(p.confidence_level(), ConfidenceLevel::VeryLow);
            prop_assert_eq!(p.mean_absolute_error(), None);
            prop_assert_eq!(p.r_squared_score(), None);
            prop_assert_eq!(p.predicted_runout_date(), None);
        }

        let growth = p.growth_adjustment_factor();
        let seasonal = p.seasonal_adjustment_factor();
        prop_assert!((1.0..=1.5).contains(&growth));
        prop_assert!((0.5..=1.5).contains(&seasonal));
    }
}
