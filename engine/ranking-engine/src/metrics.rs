//! Per-player derived metrics
//!
//! Everything here is computed from the aggregated team history in one
//! pass and reported in currency units. Players below the eligibility
//! threshold are absent from the result (absent, not zeroed), so they
//! never dilute the cohort.

use std::collections::BTreeMap;

use ledger_core::stats;
use ledger_core::{PlayerId, TeamHistory};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ranking eligibility configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Minimum games for a player to be ranked at all
    pub min_games: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { min_games: 5 }
    }
}

/// Derived performance metrics for one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerMetrics {
    pub games: usize,
    /// Sample standard deviation (n − 1) of per-game nets.
    pub std_dev: f64,
    /// Mean invested (buy-in plus approved add-ons) per game.
    pub avg_buy_in: f64,
    /// Mean net per game.
    pub avg_profit: f64,
    /// Summed net over all games.
    pub total_balance: f64,
    /// 100 * total net / total invested.
    pub roi_pct: f64,
    /// Share of the aggregate positive pot: 100 * total net / sum of all
    /// positive per-game nets across the whole pool. Negative for losing
    /// players.
    pub win_share_pct: f64,
    /// Percentage of games finished in profit.
    pub win_pct: f64,
    /// Net per hour across games with a known duration.
    pub hourly_winrate: f64,
    pub best_result: f64,
    pub worst_result: f64,
    /// Spread relative to stake size: std_dev / avg_buy_in.
    pub volatility_index: f64,
}

/// Compute metrics for every ranking-eligible player of the team.
pub fn compute_metrics(
    history: &TeamHistory,
    config: &RankingConfig,
) -> BTreeMap<PlayerId, PlayerMetrics> {
    // The positive pot aggregates over the whole pool, eligible or not:
    // it is the denominator of every win-share.
    let positive_pot: f64 = history
        .players()
        .flat_map(|p| history.net_series(p))
        .filter(|net| *net > 0.0)
        .sum();

    let mut metrics = BTreeMap::new();
    for player in history.players() {
        let results = history.results(player);
        if results.len() < config.min_games {
            continue;
        }

        let nets: Vec<f64> = results.iter().map(|r| r.net_units()).collect();
        let invested: Vec<f64> = results.iter().map(|r| r.invested_units()).collect();
        let games = nets.len();

        let total_balance: f64 = nets.iter().sum();
        let total_invested: f64 = invested.iter().sum();
        let std_dev = stats::sample_std_dev(&nets);
        let avg_buy_in = stats::mean(&invested);

        let mut timed_net = 0.0;
        let mut timed_hours = 0.0;
        for result in results {
            if let Some(hours) =
                history.game(result.game_id).and_then(|g| g.duration_hours())
            {
                timed_net += result.net_units();
                timed_hours += hours;
            }
        }

        let wins = nets.iter().filter(|net| **net > 0.0).count();

        metrics.insert(
            player,
            PlayerMetrics {
                games,
                std_dev,
                avg_buy_in,
                avg_profit: stats::mean(&nets),
                total_balance,
                roi_pct: if total_invested > 0.0 {
                    100.0 * total_balance / total_invested
                } else {
                    0.0
                },
                win_share_pct: if positive_pot > 0.0 {
                    100.0 * total_balance / positive_pot
                } else {
                    0.0
                },
                win_pct: 100.0 * wins as f64 / games as f64,
                hourly_winrate: if timed_hours > 0.0 { timed_net / timed_hours } else { 0.0 },
                best_result: nets.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                worst_result: nets.iter().copied().fold(f64::INFINITY, f64::min),
                volatility_index: if avg_buy_in > 0.0 { std_dev / avg_buy_in } else { 0.0 },
            },
        );
    }

    debug!(eligible = metrics.len(), "computed ranking metrics");
    metrics
}

/// Team-level averages of every metric over the eligible cohort.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TeamAverages {
    pub std_dev: f64,
    pub avg_buy_in: f64,
    pub avg_profit: f64,
    pub total_balance: f64,
    pub roi_pct: f64,
    pub win_share_pct: f64,
    pub win_pct: f64,
    pub hourly_winrate: f64,
    pub best_result: f64,
    pub worst_result: f64,
    pub volatility_index: f64,
}

impl TeamAverages {
    pub fn from_metrics(metrics: &BTreeMap<PlayerId, PlayerMetrics>) -> TeamAverages {
        if metrics.is_empty() {
            return TeamAverages::default();
        }
        let n = metrics.len() as f64;
        let mut avg = TeamAverages::default();
        for m in metrics.values() {
            avg.std_dev += m.std_dev;
            avg.avg_buy_in += m.avg_buy_in;
            avg.avg_profit += m.avg_profit;
            avg.total_balance += m.total_balance;
            avg.roi_pct += m.roi_pct;
            avg.win_share_pct += m.win_share_pct;
            avg.win_pct += m.win_pct;
            avg.hourly_winrate += m.hourly_winrate;
            avg.best_result += m.best_result;
            avg.worst_result += m.worst_result;
            avg.volatility_index += m.volatility_index;
        }
        avg.std_dev /= n;
        avg.avg_buy_in /= n;
        avg.avg_profit /= n;
        avg.total_balance /= n;
        avg.roi_pct /= n;
        avg.win_share_pct /= n;
        avg.win_pct /= n;
        avg.hourly_winrate /= n;
        avg.best_result /= n;
        avg.worst_result /= n;
        avg.volatility_index /= n;
        avg
    }
}
