use chrono::{NaiveDate, TimeZone, Utc};
use reorder_core::models::{ChildId, DailyUsage, UsageRecord};
use reorder_forecast::{aggregate_daily, DailySeries};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(child: ChildId, day: u32, hour: u32, quantity: u32) -> UsageRecord {
    UsageRecord {
        child_id: child,
        timestamp: Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap(),
        quantity,
    }
}

#[test]
fn records_summed_per_utc_day() {
    let child = ChildId::random();
    let records = vec![
        record(child, 3, 22, 1),
        record(child, 1, 8, 2),
        record(child, 1, 23, 3),
        record(child, 3, 1, 4),
    ];
    let daily = aggregate_daily(&records);
    assert_eq!(
        daily,
        vec![
            DailyUsage { date: date(2025, 3, 1), quantity: 5 },
            DailyUsage { date: date(2025, 3, 3), quantity: 5 },
        ]
    );
}

#[test]
fn no_records_no_days() {
    assert!(aggregate_daily(&[]).is_empty());
}

#[test]
fn zero_fill_covers_gaps_and_extends_to_through() {
    let daily = vec![
        DailyUsage { date: date(2025, 3, 1), quantity: 4 },
        DailyUsage { date: date(2025, 3, 4), quantity: 6 },
    ];
    let series = DailySeries::zero_filled(&daily, date(2025, 3, 6));
    assert_eq!(series.values(), &[4.0, 0.0, 0.0, 6.0, 0.0, 0.0]);
    assert_eq!(series.start(), Some(date(2025, 3, 1)));
    assert_eq!(series.end(), Some(date(2025, 3, 6)));
    assert_eq!(series.days_with_usage(), 2);
}

#[test]
fn zero_fill_keeps_usage_after_through() {
    let daily = vec![
        DailyUsage { date: date(2025, 3, 1), quantity: 4 },
        DailyUsage { date: date(2025, 3, 3), quantity: 6 },
    ];
    let series = DailySeries::zero_filled(&daily, date(2025, 3, 2));
    assert_eq!(series.len(), 3);
    assert_eq!(series.end(), Some(date(2025, 3, 3)));
}

#[test]
fn empty_series() {
    let series = DailySeries::zero_filled(&[], date(2025, 3, 2));
    assert!(series.is_empty());
    assert_eq!(series.start(), None);
    assert_eq!(series.end(), None);
    assert_eq!(series.trailing_mean(14), 0.0);
}

#[test]
fn tail_moves_start_forward() {
    let series = DailySeries::new(date(2025, 1, 1), (1..=10).map(f64::from).collect());
    let tail = series.tail(3);
    assert_eq!(tail.values(), &[8.0, 9.0, 10.0]);
    assert_eq!(tail.start(), Some(date(2025, 1, 8)));
    assert_eq!(series.tail(50), series);
}

#[test]
fn trailing_mean_uses_available_days() {
    let series = DailySeries::new(date(2025, 1, 1), vec![2.0, 4.0, 6.0, 8.0]);
    assert_eq!(series.trailing_mean(2), 7.0);
    assert_eq!(series.trailing_mean(14), 5.0);
}
