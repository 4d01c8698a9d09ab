//! Internal rate of return on illustrated cashflows

const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: usize = 1000;
const MIN_RATE: f64 = -0.99;
const MAX_RATE: f64 = 10.0;

/// Annualised IRR of a cashflow series (negative = paid in, positive = paid out)
///
/// `periods_per_year` converts the periodic solution to an annual rate.
/// Returns `None` when the series never changes sign or no root is found.
pub fn calculate_irr(cashflows: &[f64], periods_per_year: u32) -> Option<f64> {
    if cashflows.is_empty() {
        return None;
    }
    if cashflows.iter().all(|cf| cf.abs() < TOLERANCE) {
        return Some(0.0);
    }

    let has_inflow = cashflows.iter().any(|&cf| cf > TOLERANCE);
    let has_outflow = cashflows.iter().any(|&cf| cf < -TOLERANCE);
    if !has_inflow || !has_outflow {
        return None;
    }

    let periodic = newton(cashflows).or_else(|| bisect(cashflows))?;
    Some((1.0 + periodic).powi(periods_per_year as i32) - 1.0)
}

fn npv(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// d(NPV)/d(rate)
fn npv_slope(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(t, &cf)| -(t as f64) * cf / (1.0 + rate).powi(t as i32 + 1))
        .sum()
}

fn newton(cashflows: &[f64]) -> Option<f64> {
    let mut rate = 0.05;
    for _ in 0..MAX_ITERATIONS {
        let slope = npv_slope(cashflows, rate);
        if slope.abs() < 1e-20 {
            return None;
        }
        let next = (rate - npv(cashflows, rate) / slope).clamp(MIN_RATE, MAX_RATE);
        if (next - rate).abs() < TOLERANCE {
            return Some(next);
        }
        rate = next;
    }
    None
}

fn bisect(cashflows: &[f64]) -> Option<f64> {
    let (mut low, mut high) = (MIN_RATE, MAX_RATE);
    let mut npv_low = npv(cashflows, low);
    if npv_low * npv(cashflows, high) > 0.0 {
        return None;
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = npv(cashflows, mid);
        if npv_mid.abs() < TOLERANCE || (high - low) / 2.0 < TOLERANCE {
            return Some(mid);
        }
        if npv_mid * npv_low < 0.0 {
            high = mid;
        } else {
            low = mid;
            npv_low = npv_mid;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_single_period_return() {
        let irr = calculate_irr(&[-1000.0, 1100.0], 1).unwrap();
        assert_abs_diff_eq!(irr, 0.10, epsilon = 1e-8);
    }

    #[test]
    fn test_monthly_series_annualised() {
        let mut cashflows = vec![-1000.0];
        cashflows.extend(vec![0.0; 11]);
        cashflows.push(1100.0);

        let irr = calculate_irr(&cashflows, 12).unwrap();
        assert!((irr - 0.10).abs() < 0.001, "Expected ~10% IRR, got {}", irr);
    }

    #[test]
    fn test_no_sign_change() {
        assert!(calculate_irr(&[-100.0, -50.0], 1).is_none());
        assert!(calculate_irr(&[], 1).is_none());
        assert_eq!(calculate_irr(&[0.0, 0.0], 1), Some(0.0));
    }
}
