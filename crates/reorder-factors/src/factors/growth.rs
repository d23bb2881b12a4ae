use reorder_core::config::GrowthConfig;
use reorder_core::constants::DAYS_PER_MONTH;

/// Growth adjustment factor per future day.
///
/// Day 0 is 1.0. Each following day adds `monthly_rate / DAYS_PER_MONTH`,
/// where the rate comes from the bracket of the child's projected age on
/// that day. Rates are non-negative, so the curve never decreases.
///
/// Range: 1.0 – `max_factor` (capped).
pub fn growth_factors(age_months: f64, horizon_days: u32, config: &GrowthConfig) -> Vec<f64> {
    let age_months = if age_months.is_finite() { age_months.max(0.0) } else { 0.0 };
    let mut factor = 1.0_f64;
    let mut out = Vec::with_capacity(horizon_days as usize);

    for day in 0..horizon_days {
        out.push(factor.clamp(1.0, config.max_factor));
        let projected_age = age_months + f64::from(day) / DAYS_PER_MONTH;
        factor += monthly_rate(projected_age, config) / DAYS_PER_MONTH;
    }
    out
}

/// Growth rate for a child of `age_months`. Zero past the last bracket.
pub fn monthly_rate(age_months: f64, config: &GrowthConfig) -> f64 {
    config
        .brackets
        .iter()
        .find(|b| age_months < b.max_age_months)
        .map(|b| b.monthly_rate.max(0.0))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_follows_brackets() {
        let config = GrowthConfig::default();
        assert_eq!(monthly_rate(0.5, &config), 0.05);
        assert_eq!(monthly_rate(6.0, &config), 0.03);
        assert_eq!(monthly_rate(18.0, &config), 0.015);
        assert_eq!(monthly_rate(36.0, &config), 0.0);
    }

    #[test]
    fn non_finite_age_treated_as_newborn() {
        let config = GrowthConfig::default();
        let a = growth_factors(f64::NAN, 10, &config);
        let b = growth_factors(0.0, 10, &config);
        assert_eq!(a, b);
    }
}
