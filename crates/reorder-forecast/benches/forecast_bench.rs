//! Forecaster benchmarks
//!
//! Run with: cargo bench --package reorder-forecast

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reorder_forecast::{DailySeries, Forecaster};

fn noisy_weekly(days: usize) -> DailySeries {
    let pattern = [5.0, 6.0, 7.0, 6.0, 5.0, 7.0, 6.0];
    let values = (0..days)
        .map(|t| pattern[t % 7] + ((t * 37) % 5) as f64 * 0.3)
        .collect();
    DailySeries::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), values)
}

fn bench_fit_forecast(c: &mut Criterion) {
    let forecaster = Forecaster::default();
    let mut group = c.benchmark_group("fit_forecast");
    for days in [10usize, 30, 90, 180] {
        let series = noisy_weekly(days);
        group.bench_with_input(BenchmarkId::from_parameter(days), &series, |b, s| {
            b.iter(|| forecaster.fit_forecast(black_box(s), 30))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fit_forecast);
criterion_main!(benches);
