//! Valuation metrics over monthly cash flows
//!
//! All accumulation is a strict left-to-right pass in month order so that results
//! are reproducible bit for bit.

/// Running total of a series, in order
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    values
        .iter()
        .map(|&v| {
            total += v;
            total
        })
        .collect()
}

/// First 1-based month at which cumulative cash is strictly positive
pub fn payback_month(cum_cash: &[f64]) -> Option<u32> {
    cum_cash
        .iter()
        .position(|&c| c > 0.0)
        .map(|idx| idx as u32 + 1)
}

/// Discount factor for a month index under an annual rate.
///
/// Month 0 is undiscounted; the exponent is measured in years.
pub fn discount_factor(annual_rate: f64, month_index: usize) -> f64 {
    (1.0 + annual_rate).powf(month_index as f64 / 12.0)
}

/// Net present value of monthly cash flows at an annual rate
pub fn npv(cash: &[f64], annual_rate: f64) -> f64 {
    cash.iter()
        .enumerate()
        .map(|(t, &cf)| cf / discount_factor(annual_rate, t))
        .fold(0.0, |acc, pv| acc + pv)
}

/// Deepest cumulative shortfall, reported as a non-negative amount
pub fn peak_cash_need(cum_cash: &[f64]) -> f64 {
    let trough = cum_cash.iter().copied().fold(f64::INFINITY, f64::min);
    if trough.is_finite() {
        (-trough).max(0.0)
    } else {
        0.0
    }
}

/// Final month's subscriber count, truncated to whole subscribers
pub fn sub_count_end(subscribers: &[f64]) -> u64 {
    subscribers.last().map(|&s| s.max(0.0) as u64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cumulative_sum_running_total() {
        assert_eq!(cumulative_sum(&[1.0, -3.0, 5.0]), vec![1.0, -2.0, 3.0]);
        assert!(cumulative_sum(&[]).is_empty());
    }

    #[test]
    fn test_payback_requires_strictly_positive() {
        assert_eq!(payback_month(&[-5.0, 0.0, 2.0]), Some(3));
        assert_eq!(payback_month(&[1.0, 2.0]), Some(1));
        assert_eq!(payback_month(&[-5.0, -1.0, 0.0]), None);
    }

    #[test]
    fn test_npv_zero_rate_is_plain_sum() {
        assert_relative_eq!(npv(&[100.0, 200.0, 300.0], 0.0), 600.0);
    }

    #[test]
    fn test_npv_discounts_by_fractional_years() {
        // Month 12 is discounted by exactly one year
        let mut cash = vec![0.0; 12];
        cash.push(108.0);
        assert_relative_eq!(npv(&cash, 0.08), 100.0, epsilon = 1e-9);

        // Month 0 is never discounted
        assert_relative_eq!(npv(&[250.0], 0.5), 250.0);
    }

    #[test]
    fn test_peak_cash_need_never_negative() {
        assert_relative_eq!(peak_cash_need(&[-10.0, -40.0, -5.0, 20.0]), 40.0);
        assert_eq!(peak_cash_need(&[5.0, 10.0]), 0.0);
    }

    #[test]
    fn test_sub_count_end_truncates() {
        assert_eq!(sub_count_end(&[10.0, 12_345.99]), 12_345);
        assert_eq!(sub_count_end(&[]), 0);
    }
}
