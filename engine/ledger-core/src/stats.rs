//! Shared statistics helpers
//!
//! The ledger's two statistics consumers follow different variance
//! conventions: the team-prior estimator treats a player's games as the
//! full population (divide by n), while the ranking metrics treat them as
//! a sample (divide by n − 1). Both conventions are preserved under
//! distinct named functions; callers pick one deliberately.

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divide by n); 0.0 when fewer than two values.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divide by n).
pub fn population_std_dev(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Sample variance (divide by n − 1); 0.0 when fewer than two values.
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

/// Sample standard deviation (divide by n − 1).
pub fn sample_std_dev(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn single_value_has_zero_spread_under_both_conventions() {
        assert_eq!(population_variance(&[42.0]), 0.0);
        assert_eq!(sample_variance(&[42.0]), 0.0);
    }

    #[test]
    fn population_and_sample_variance_differ_by_bessel_factor() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let pop = population_variance(&values);
        let samp = sample_variance(&values);
        assert!((pop - 4.0).abs() < 1e-12);
        assert!((samp - 4.0 * 8.0 / 7.0).abs() < 1e-12);
        assert!((population_std_dev(&values) - 2.0).abs() < 1e-12);
    }
}
