use std::sync::Arc;

use reorder_core::config::HistoryConfig;
use reorder_core::errors::AccessorError;
use reorder_core::models::ChildId;
use reorder_prediction::{Sufficiency, UsageHistory};
use test_fixtures::*;

fn history(store: Arc<InMemoryStore>) -> UsageHistory {
    UsageHistory::new(store, HistoryConfig::default())
}

#[test]
fn window_is_zero_filled_through_yesterday() {
    let store = Arc::new(InMemoryStore::new());
    let child = ChildId::random();
    // Usage on Apr 1 and Apr 3, predicting at midnight on Apr 10.
    store.add_usage(daily_records(child, date(2025, 4, 1), &[6, 0, 4]));

    let window = history(store).load(child, midnight(date(2025, 4, 10))).unwrap();
    assert_eq!(window.series.start(), Some(date(2025, 4, 1)));
    assert_eq!(window.series.end(), Some(date(2025, 4, 9)));
    assert_eq!(window.series.len(), 9);
    assert_eq!(window.distinct_days, 2);
    assert_eq!(
        window.sufficiency,
        Sufficiency::Insufficient {
            distinct_days: 2,
            required: 7
        }
    );
    // 10 units over the 9 days in the window.
    assert!((window.consumption_rate - 10.0 / 9.0).abs() < 1e-9);
}

#[test]
fn records_outside_lookback_are_ignored() {
    let store = Arc::new(InMemoryStore::new());
    let child = ChildId::random();
    store.add_usage(repeating_history(child, date(2025, 6, 1), 200, &[5]));

    let window = history(store).load(child, midnight(date(2025, 6, 1))).unwrap();
    assert_eq!(window.series.len(), 90);
    assert_eq!(window.distinct_days, 90);
    assert!(window.sufficiency.is_sufficient());
    assert_eq!(window.consumption_rate, 5.0);
}

#[test]
fn rate_uses_trailing_two_weeks() {
    let store = Arc::new(InMemoryStore::new());
    let child = ChildId::random();
    let mut quantities = vec![2u32; 30];
    quantities.extend(vec![9u32; 14]);
    store.add_usage(daily_records(child, date(2025, 3, 1), &quantities));

    let as_of = midnight(date(2025, 3, 1) + chrono::Duration::days(44));
    let window = history(store).load(child, as_of).unwrap();
    assert_eq!(window.consumption_rate, 9.0);
}

#[test]
fn usage_on_the_prediction_day_is_left_out() {
    let store = Arc::new(InMemoryStore::new());
    let child = ChildId::random();
    let today = date(2025, 6, 1);
    store.add_usage(repeating_history(child, today, 60, &[6]));
    store.add_usage(vec![reorder_core::models::UsageRecord {
        child_id: child,
        timestamp: today.and_hms_opt(8, 0, 0).unwrap().and_utc(),
        quantity: 2,
    }]);

    let window = history(store).load(child, at_noon(today)).unwrap();
    assert_eq!(window.series.end(), Some(date(2025, 5, 31)));
    assert_eq!(window.series.len(), 60);
    assert_eq!(window.distinct_days, 60);
    assert_eq!(window.consumption_rate, 6.0);
}

#[test]
fn lookback_counts_whole_days_before_the_prediction_day() {
    let store = Arc::new(InMemoryStore::new());
    let child = ChildId::random();
    store.add_usage(repeating_history(child, date(2025, 6, 1), 200, &[5]));

    let window = history(store).load(child, at_noon(date(2025, 6, 1))).unwrap();
    assert_eq!(window.series.len(), 90);
    assert_eq!(window.series.start(), Some(date(2025, 3, 3)));
}

#[test]
fn no_history_is_empty_and_insufficient() {
    let store = Arc::new(InMemoryStore::new());
    let window = history(store)
        .load(ChildId::random(), midnight(date(2025, 3, 1)))
        .unwrap();
    assert!(window.series.is_empty());
    assert_eq!(window.consumption_rate, 0.0);
    assert!(!window.sufficiency.is_sufficient());
}

#[test]
fn accessor_errors_propagate() {
    let history = UsageHistory::new(Arc::new(FailingHistory), HistoryConfig::default());
    let err = history
        .load(ChildId::random(), midnight(date(2025, 3, 1)))
        .unwrap_err();
    assert!(matches!(err, AccessorError::Unreachable { .. }));
}
