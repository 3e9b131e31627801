//! Win probability and reliability labels
//!
//! The next session's net result is modeled as Normal(mu_adjusted,
//! predictive_sigma^2); the win probability is the mass above zero,
//! reported in percent.

use serde::{Deserialize, Serialize};

use crate::config::ReliabilityConfig;

/// P(next session net > 0) in percent, given the zero-sum-adjusted mean
/// and the predictive spread.
///
/// A degenerate spread means the outcome is already decided: 100/0/50 by
/// the sign of the mean.
pub fn win_probability(mu_adjusted: f64, predictive_sigma: f64) -> f64 {
    if predictive_sigma <= 0.0 {
        return if mu_adjusted > 0.0 {
            100.0
        } else if mu_adjusted < 0.0 {
            0.0
        } else {
            50.0
        };
    }
    100.0 * normal_cdf(mu_adjusted / predictive_sigma)
}

/// Force complementary probabilities for a heads-up pool.
///
/// Two-player poker is strictly zero-sum, so the independently computed
/// probabilities are rescaled to sum to 100. Applied only when the pool
/// has exactly two players and the unscaled sum is positive.
pub fn normalize_heads_up(probabilities: &mut [f64]) {
    if probabilities.len() != 2 {
        return;
    }
    let total: f64 = probabilities.iter().sum();
    if total > 0.0 {
        for p in probabilities.iter_mut() {
            *p = *p / total * 100.0;
        }
    }
}

/// Qualitative confidence label derived from the raw game count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reliability {
    Low,
    Moderate,
    High,
}

impl Reliability {
    pub fn from_games(n_games: usize, config: &ReliabilityConfig) -> Reliability {
        if n_games < config.low_below {
            Reliability::Low
        } else if n_games < config.moderate_below {
            Reliability::Moderate
        } else {
            Reliability::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Reliability::Low => "Low",
            Reliability::Moderate => "Moderate",
            Reliability::High => "High",
        }
    }
}

/// Normal CDF via the error function.
fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Error function approximation (Abramowitz and Stegun).
fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_around_even_money() {
        assert!((win_probability(0.0, 50.0) - 50.0).abs() < 1e-9);
        let up = win_probability(30.0, 50.0);
        let down = win_probability(-30.0, 50.0);
        assert!((up + down - 100.0).abs() < 1e-6);
        assert!(up > 50.0);
    }

    #[test]
    fn one_sigma_edge_is_about_84_percent() {
        let p = win_probability(50.0, 50.0);
        assert!((p - 84.134).abs() < 0.05);
    }

    #[test]
    fn degenerate_sigma_is_decided_by_sign() {
        assert_eq!(win_probability(10.0, 0.0), 100.0);
        assert_eq!(win_probability(-10.0, 0.0), 0.0);
        assert_eq!(win_probability(0.0, 0.0), 50.0);
    }

    #[test]
    fn heads_up_rescales_to_exactly_one_hundred() {
        let mut probs = [70.0, 40.0];
        normalize_heads_up(&mut probs);
        assert!((probs[0] - 700.0 / 11.0).abs() < 1e-9);
        assert!((probs[1] - 400.0 / 11.0).abs() < 1e-9);
        assert!((probs[0] + probs[1] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn heads_up_leaves_degenerate_and_larger_pools_alone() {
        let mut zeros = [0.0, 0.0];
        normalize_heads_up(&mut zeros);
        assert_eq!(zeros, [0.0, 0.0]);

        let mut trio = [70.0, 40.0, 20.0];
        normalize_heads_up(&mut trio);
        assert_eq!(trio, [70.0, 40.0, 20.0]);
    }

    #[test]
    fn reliability_tiers_follow_raw_counts() {
        let config = ReliabilityConfig::default();
        assert_eq!(Reliability::from_games(0, &config), Reliability::Low);
        assert_eq!(Reliability::from_games(4, &config), Reliability::Low);
        assert_eq!(Reliability::from_games(5, &config), Reliability::Moderate);
        assert_eq!(Reliability::from_games(14, &config), Reliability::Moderate);
        assert_eq!(Reliability::from_games(15, &config), Reliability::High);
    }

    #[test]
    fn erf_matches_known_values() {
        // Reference values, A&S table accuracy ~1.5e-7.
        assert!(erf(0.0).abs() < 1e-12);
        assert!((erf(1.0) - 0.8427007929).abs() < 1e-6);
        assert!((erf(-1.0) + 0.8427007929).abs() < 1e-6);
        assert!((erf(2.0) - 0.9953222650).abs() < 1e-6);
    }
}
