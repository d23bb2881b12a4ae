//! Runout projection: when cumulative consumption reaches on-hand stock.

use chrono::{DateTime, Duration, Utc};
use reorder_core::constants::{SECONDS_PER_DAY, WEEKLY_PERIOD};

/// Runouts further out than this are not reported.
pub const MAX_RUNOUT_DAYS: f64 = 3650.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunoutProjection {
    /// Stock runs out at this instant.
    At(DateTime<Utc>),
    /// The forecast consumes nothing, so stock never runs out.
    NoConsumption,
    /// Runout lies past [`MAX_RUNOUT_DAYS`].
    BeyondRange,
}

/// Walk the adjusted daily forecast from `from`, consuming `on_hand`.
///
/// Day `d` of `daily` covers `[from + d, from + d + 1)`; consumption within
/// a day is spread evenly, so runout can fall mid-day. Past the end of the
/// forecast, consumption continues at the mean of its final week.
pub fn project_runout(daily: &[f64], on_hand: u32, from: DateTime<Utc>) -> RunoutProjection {
    if on_hand == 0 {
        return RunoutProjection::At(from);
    }

    let mut remaining = f64::from(on_hand);
    let mut days = None;
    for (d, demand) in daily.iter().enumerate() {
        if *demand > 0.0 && *demand >= remaining {
            days = Some(d as f64 + remaining / demand);
            break;
        }
        remaining -= demand.max(0.0);
    }

    let days = match days {
        Some(days) => days,
        None => {
            let tail = &daily[daily.len().saturating_sub(WEEKLY_PERIOD)..];
            let rate = if tail.is_empty() {
                0.0
            } else {
                tail.iter().sum::<f64>() / tail.len() as f64
            };
            if rate <= 0.0 || !rate.is_finite() {
                return RunoutProjection::NoConsumption;
            }
            daily.len() as f64 + remaining / rate
        }
    };

    if days > MAX_RUNOUT_DAYS {
        return RunoutProjection::BeyondRange;
    }
    let offset = Duration::seconds((days * SECONDS_PER_DAY as f64).round() as i64);
    match from.checked_add_signed(offset) {
        Some(at) => RunoutProjection::At(at),
        None => RunoutProjection::BeyondRange,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn runout_within_horizon() {
        // 40 units at 6/day: 6 full days (36) then 4/6 of day 7.
        let daily = vec![6.0; 30];
        let RunoutProjection::At(at) = project_runout(&daily, 40, start()) else {
            panic!("expected a runout");
        };
        let days = (at - start()).num_seconds() as f64 / 86_400.0;
        assert!((days - 40.0 / 6.0).abs() < 1e-3);
    }

    #[test]
    fn runout_beyond_horizon_uses_final_week() {
        let daily = vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0];
        // 17 consumed over 10 days, 3 left at 2/day.
        let RunoutProjection::At(at) = project_runout(&daily, 20, start()) else {
            panic!("expected a runout");
        };
        assert_eq!(at, start() + Duration::hours(36 + 240));
    }

    #[test]
    fn empty_stock_runs_out_now() {
        assert_eq!(project_runout(&[5.0; 3], 0, start()), RunoutProjection::At(start()));
    }

    #[test]
    fn zero_forecast_never_runs_out() {
        assert_eq!(project_runout(&[0.0; 10], 5, start()), RunoutProjection::NoConsumption);
    }

    #[test]
    fn tiny_rate_is_out_of_range() {
        assert_eq!(project_runout(&[1e-6; 10], 500, start()), RunoutProjection::BeyondRange);
    }
}
