//! Subscriber base state carried from month to month

/// In-force subscriber base during the recurrence
#[derive(Debug, Clone, Default)]
pub struct ProjectionState {
    /// Months advanced so far
    pub projection_month: u32,

    /// End-of-month in-force base after churn
    pub subscribers: f64,

    /// Subscribers lost in the most recent month
    pub churned: f64,
}

impl ProjectionState {
    /// Empty base before the first month
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one month: add this month's gross adds, then churn the whole base.
    ///
    /// New subscribers are exposed to the same month's churn. Returns the
    /// end-of-month base.
    pub fn advance_month(&mut self, gross_adds: f64, churn_rate: f64) -> f64 {
        self.projection_month += 1;

        let base = self.subscribers + gross_adds;
        self.churned = base * churn_rate;
        self.subscribers = base - self.churned;

        self.subscribers
    }
}

/// Run the subscriber recurrence over a sequence of monthly gross adds
pub fn project_subscribers(gross_adds: &[f64], churn_rate: f64) -> Vec<f64> {
    let mut state = ProjectionState::new();
    gross_adds
        .iter()
        .map(|&adds| state.advance_month(adds, churn_rate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_churn_applies_after_adds() {
        let mut state = ProjectionState::new();

        // 1000 added then 10% churned in the same month
        let first = state.advance_month(1_000.0, 0.10);
        assert_relative_eq!(first, 900.0, epsilon = 1e-9);
        assert_relative_eq!(state.churned, 100.0, epsilon = 1e-9);

        // (900 + 1000) * 0.9
        let second = state.advance_month(1_000.0, 0.10);
        assert_relative_eq!(second, 1_710.0, epsilon = 1e-9);
        assert_eq!(state.projection_month, 2);
    }

    #[test]
    fn test_no_churn_accumulates() {
        let subs = project_subscribers(&[10_000.0; 3], 0.0);
        assert_eq!(subs, vec![10_000.0, 20_000.0, 30_000.0]);
    }

    #[test]
    fn test_full_churn_empties_base() {
        let subs = project_subscribers(&[5_000.0; 4], 1.0);
        assert!(subs.iter().all(|&s| s == 0.0));
    }
}
