use serde::{Deserialize, Serialize};

/// One row of the product size table.
///
/// A child belongs to the bracket whose `[min_age_months, max_age_months)`
/// range contains their age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeBracket {
    pub label: String,
    pub min_age_months: f64,
    pub max_age_months: f64,
    /// Typical daily usage for a child in this bracket.
    pub expected_daily_usage: f64,
}

impl SizeBracket {
    pub fn new(label: &str, min_age_months: f64, max_age_months: f64, expected: f64) -> Self {
        Self {
            label: label.to_string(),
            min_age_months,
            max_age_months,
            expected_daily_usage: expected,
        }
    }

    pub fn contains(&self, age_months: f64) -> bool {
        age_months >= self.min_age_months && age_months < self.max_age_months
    }
}
