//! Zero-sum recentering
//!
//! Poker moves money between the players at the table; it creates none.
//! When the pool-average prediction drifts from zero (a sample dominated
//! by strong players will do that) the drift is removed before asking
//! whether any one player beats this particular table. The adjustment is a
//! pure translation: it recenters, never rescales, so the spread between
//! players is untouched and the adjusted means sum to zero.

/// Average raw posterior mean across the seated pool; 0.0 for an empty
/// pool.
pub fn table_bias(raw_means: &[f64]) -> f64 {
    if raw_means.is_empty() {
        return 0.0;
    }
    raw_means.iter().sum::<f64>() / raw_means.len() as f64
}

/// Subtract the table bias from every raw mean.
pub fn recenter(raw_means: &[f64]) -> Vec<f64> {
    let bias = table_bias(raw_means);
    raw_means.iter().map(|mu| mu - bias).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjusted_means_sum_to_zero() {
        let raw = [42.0, -17.0, 130.5, 8.25];
        let adjusted = recenter(&raw);
        let sum: f64 = adjusted.iter().sum();
        assert!(sum.abs() < 1e-9);
    }

    #[test]
    fn zero_bias_is_a_no_op() {
        let raw = [30.0, -10.0, -20.0];
        assert!(table_bias(&raw).abs() < 1e-12);
        let adjusted = recenter(&raw);
        for (a, r) in adjusted.iter().zip(raw.iter()) {
            assert!((a - r).abs() < 1e-12);
        }
    }

    #[test]
    fn translation_preserves_pairwise_gaps() {
        let raw = [100.0, 60.0, 10.0];
        let adjusted = recenter(&raw);
        for i in 0..raw.len() {
            for j in 0..raw.len() {
                assert!(((raw[i] - raw[j]) - (adjusted[i] - adjusted[j])).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn empty_pool_is_empty() {
        assert_eq!(table_bias(&[]), 0.0);
        assert!(recenter(&[]).is_empty());
    }
}
