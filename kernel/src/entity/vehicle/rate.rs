use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Non-negative currency amount per rental day. Kept at full precision;
/// rounding to two decimal places happens only at presentation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DailyRate(f64);

impl DailyRate {
    pub fn new(rate: impl Into<f64>) -> Self {
        Self(rate.into())
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }

    pub fn fee_for(&self, days: i64) -> f64 {
        days as f64 * self.0
    }
}

impl Display for DailyRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod test {
    use crate::entity::DailyRate;

    #[test]
    fn fee_is_days_times_rate() {
        assert_eq!(DailyRate::new(50.0).fee_for(4), 200.0);
        assert_eq!(DailyRate::new(19.99).fee_for(3), 3.0 * 19.99);
    }

    #[test]
    fn display_rounds_to_two_places() {
        assert_eq!(DailyRate::new(49.995).to_string(), "50.00");
    }
}
