use serde::{Deserialize, Serialize};

/// Permitted rental duration in whole days, both bounds inclusive.
/// `min <= max` is expected from the operator but not enforced here.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct RentWindow {
    min_days: i64,
    max_days: i64,
}

impl RentWindow {
    pub fn new(min_days: impl Into<i64>, max_days: impl Into<i64>) -> Self {
        Self {
            min_days: min_days.into(),
            max_days: max_days.into(),
        }
    }

    pub fn min_days(&self) -> i64 {
        self.min_days
    }

    pub fn max_days(&self) -> i64 {
        self.max_days
    }

    pub fn contains(&self, days: i64) -> bool {
        (self.min_days..=self.max_days).contains(&days)
    }
}

#[cfg(test)]
mod test {
    use crate::entity::RentWindow;

    #[test]
    fn bounds_are_inclusive() {
        let window = RentWindow::new(2, 10);
        assert!(window.contains(2));
        assert!(window.contains(10));
        assert!(!window.contains(1));
        assert!(!window.contains(11));
    }
}
