//! Prediction pipeline facade
//!
//! Wires the stages together for the two consumers: per-game win
//! probabilities for a seated pool, and raw posteriors for team-wide
//! cohort views. Stateless apart from configuration; every call builds its
//! own intermediate structures and is safe under arbitrary concurrency.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use ledger_core::{PlayerId, TeamHistory};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PredictionConfig;
use crate::posterior::{EstimationMode, PosteriorEstimate};
use crate::prior::TeamPrior;
use crate::win_prob::{normalize_heads_up, win_probability, Reliability};
use crate::zero_sum;

/// Prediction for one player in a specific game's pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerPrediction {
    pub player_id: PlayerId,
    /// P(profit > 0) in percent.
    pub win_probability: f64,
    /// Posterior mean after zero-sum recentering, currency units.
    pub adjusted_mean: f64,
    pub predictive_sigma: f64,
    /// Raw game count behind the estimate.
    pub n_games: usize,
    pub reliability: Reliability,
}

/// Session outcome predictor for one team's history.
pub struct SessionPredictor {
    config: PredictionConfig,
}

impl SessionPredictor {
    pub fn new(config: PredictionConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(PredictionConfig::default())
    }

    /// Predict the next session for a specific pool of seated players.
    ///
    /// Runs the full pipeline: team prior, recency-weighted posterior per
    /// player, zero-sum recentering across exactly this pool, win
    /// probabilities (complementary for heads-up pools). Players without
    /// history still get a prediction through the pooled fallbacks. The
    /// result is ordered by descending win probability, ties by player id;
    /// an empty pool yields an empty vec.
    pub fn predict(
        &self,
        history: &TeamHistory,
        pool: &[PlayerId],
        now: DateTime<Utc>,
    ) -> Vec<PlayerPrediction> {
        if pool.is_empty() {
            return Vec::new();
        }

        let prior = TeamPrior::estimate(history, &self.config.prior);
        debug!(mean = prior.mean, sigma = prior.sigma, "team prior");

        let estimates: Vec<PosteriorEstimate> = pool
            .iter()
            .map(|&player| {
                PosteriorEstimate::for_player(
                    history.results(player),
                    &prior,
                    EstimationMode::TimeWeighted,
                    now,
                    &self.config,
                )
            })
            .collect();

        let raw_means: Vec<f64> = estimates.iter().map(|e| e.posterior_mean).collect();
        let adjusted_means = zero_sum::recenter(&raw_means);

        let mut probabilities: Vec<f64> = adjusted_means
            .iter()
            .zip(estimates.iter())
            .map(|(&mu, est)| win_probability(mu, est.predictive_sigma))
            .collect();
        normalize_heads_up(&mut probabilities);

        let mut predictions: Vec<PlayerPrediction> = pool
            .iter()
            .zip(estimates.iter())
            .zip(adjusted_means.iter().zip(probabilities.iter()))
            .map(|((&player_id, est), (&adjusted_mean, &win_probability))| {
                PlayerPrediction {
                    player_id,
                    win_probability,
                    adjusted_mean,
                    predictive_sigma: est.predictive_sigma,
                    n_games: est.n_games,
                    reliability: Reliability::from_games(
                        est.n_games,
                        &self.config.reliability,
                    ),
                }
            })
            .collect();

        predictions.sort_by(|a, b| {
            b.win_probability
                .partial_cmp(&a.win_probability)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.player_id.cmp(&b.player_id))
        });
        predictions
    }

    /// Raw posteriors for every player in the history, for consumers that
    /// compare the cohort rather than predict one table.
    pub fn posteriors(
        &self,
        history: &TeamHistory,
        mode: EstimationMode,
        now: DateTime<Utc>,
    ) -> HashMap<PlayerId, PosteriorEstimate> {
        let prior = TeamPrior::estimate(history, &self.config.prior);
        history
            .players()
            .map(|player| {
                let est = PosteriorEstimate::for_player(
                    history.results(player),
                    &prior,
                    mode,
                    now,
                    &self.config,
                );
                (player, est)
            })
            .collect()
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }
}
