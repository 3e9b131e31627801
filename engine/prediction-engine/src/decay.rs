//! Recency weighting
//!
//! Recent games say more about a player's current form than old ones, but
//! cash-game skill drifts slowly: games inside the last six months are
//! barely discounted (linear, 1.0 down to 0.95), and only beyond that does
//! an exponential tail take over. The sum of weights doubles as the
//! effective sample size in the Bayesian update.

use chrono::{DateTime, Utc};
use ledger_core::aggregation::PlayerGameResult;
use ledger_core::stats;

use crate::config::DecayConfig;

/// Weight of a game played `days_ago` days before the reference "now".
///
/// Future-dated games (negative `days_ago`) clamp to full weight.
pub fn recency_weight(days_ago: f64, config: &DecayConfig) -> f64 {
    let days_ago = days_ago.max(0.0);
    if days_ago <= config.full_weight_days {
        1.0 - (days_ago / config.full_weight_days) * config.recent_discount
    } else {
        let base = 1.0 - config.recent_discount;
        base * (-config.tail_decay_rate * (days_ago - config.full_weight_days)).exp()
    }
}

/// Recency-weighted summary of a player's history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedStats {
    /// Sum of recency weights; stands in for the raw game count.
    pub effective_n: f64,
    pub mean: f64,
    pub sigma: f64,
}

impl WeightedStats {
    pub const ZERO: WeightedStats = WeightedStats { effective_n: 0.0, mean: 0.0, sigma: 0.0 };
}

/// Weighted mean and spread of a player's per-game nets, in currency units.
///
/// `now` is an explicit parameter, never a hidden clock, so results are
/// reproducible. When the total weight degenerates to zero the unweighted
/// mean and population sigma stand in; with no history at all everything
/// is zero.
pub fn weighted_stats(
    results: &[PlayerGameResult],
    now: DateTime<Utc>,
    config: &DecayConfig,
) -> WeightedStats {
    if results.is_empty() {
        return WeightedStats::ZERO;
    }

    let today = now.date_naive();
    let weighted: Vec<(f64, f64)> = results
        .iter()
        .map(|r| {
            let days_ago = (today - r.date).num_days() as f64;
            (recency_weight(days_ago, config), r.net_units())
        })
        .collect();

    let total_weight: f64 = weighted.iter().map(|(w, _)| w).sum();
    if total_weight <= 0.0 {
        let nets: Vec<f64> = results.iter().map(PlayerGameResult::net_units).collect();
        return WeightedStats {
            effective_n: 0.0,
            mean: stats::mean(&nets),
            sigma: stats::population_std_dev(&nets),
        };
    }

    let mean = weighted.iter().map(|(w, x)| w * x).sum::<f64>() / total_weight;
    let variance =
        weighted.iter().map(|(w, x)| w * (x - mean).powi(2)).sum::<f64>() / total_weight;

    WeightedStats { effective_n: total_weight, mean, sigma: variance.sqrt() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn result(date: NaiveDate, net_cents: i64) -> PlayerGameResult {
        PlayerGameResult {
            game_id: 1,
            date,
            buy_in_cents: 0,
            add_on_cents: 0,
            cash_out_cents: net_cents,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn weight_anchors() {
        let config = DecayConfig::default();
        assert!((recency_weight(0.0, &config) - 1.0).abs() < 1e-12);
        assert!((recency_weight(180.0, &config) - 0.95).abs() < 1e-12);
        // Three years out: 0.95 * exp(-0.0018 * 915) ~= 0.1827
        let w = recency_weight(1095.0, &config);
        let expected = 0.95 * (-0.0018f64 * 915.0).exp();
        assert!((w - expected).abs() < 1e-12);
        assert!(w > 0.17 && w < 0.19);
    }

    #[test]
    fn weight_is_monotone_nonincreasing_across_the_boundary() {
        let config = DecayConfig::default();
        let mut prev = f64::INFINITY;
        for days in 0..1500 {
            let w = recency_weight(days as f64, &config);
            assert!(w <= prev + 1e-12, "weight rose at day {days}");
            assert!(w > 0.0);
            prev = w;
        }
    }

    #[test]
    fn future_dated_games_keep_full_weight() {
        let config = DecayConfig::default();
        assert_eq!(recency_weight(-10.0, &config), 1.0);
    }

    #[test]
    fn fresh_games_dominate_the_weighted_mean() {
        let config = DecayConfig::default();
        let today = now().date_naive();
        let results = vec![
            result(today, 10000),                                 // +100, weight 1.0
            result(today - chrono::Days::new(1095), -10000),      // -100, weight ~0.18
        ];
        let ws = weighted_stats(&results, now(), &config);
        assert!(ws.mean > 0.0);
        assert!(ws.effective_n > 1.0 && ws.effective_n < 2.0);
    }

    #[test]
    fn empty_history_is_all_zeros() {
        let ws = weighted_stats(&[], now(), &DecayConfig::default());
        assert_eq!(ws, WeightedStats::ZERO);
    }

    #[test]
    fn same_day_games_reduce_to_unweighted_stats() {
        let config = DecayConfig::default();
        let today = now().date_naive();
        let results =
            vec![result(today, 10000), result(today, -5000), result(today, 4000)];
        let ws = weighted_stats(&results, now(), &config);
        let nets = [100.0, -50.0, 40.0];
        assert!((ws.mean - ledger_core::stats::mean(&nets)).abs() < 1e-9);
        assert!((ws.sigma - ledger_core::stats::population_std_dev(&nets)).abs() < 1e-9);
        assert!((ws.effective_n - 3.0).abs() < 1e-12);
    }
}
