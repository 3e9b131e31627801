//! Conjugate normal-normal posterior per player
//!
//! Blends a player's own history with the team prior. The posterior mean
//! shrinks toward the prior when evidence is thin and tracks the player's
//! own record as games accumulate; the predictive sigma adds back the
//! per-game observation noise so it describes a single future session, not
//! just the mean.

use chrono::{DateTime, Utc};
use ledger_core::aggregation::PlayerGameResult;
use ledger_core::stats;

use crate::config::PredictionConfig;
use crate::decay::weighted_stats;
use crate::prior::TeamPrior;

/// Which statistics feed the likelihood.
///
/// Live per-game prediction weighs recent form more heavily; team-wide
/// cohort views compare everyone on raw, unweighted records. The two call
/// sites choose different inputs deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimationMode {
    /// Recency-weighted mean/sigma with the effective sample size.
    TimeWeighted,
    /// Unweighted mean and population sigma with the raw game count.
    CohortComparison,
}

/// Posterior over a player's per-game net result, in currency units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosteriorEstimate {
    pub posterior_mean: f64,
    pub posterior_sigma: f64,
    /// Spread of a single future session: parameter uncertainty plus
    /// per-game observation noise.
    pub predictive_sigma: f64,
    /// Sample size used in the update (effective or raw, per mode).
    pub n_effective: f64,
    /// Raw game count, regardless of mode. Drives reliability labels.
    pub n_games: usize,
}

impl PosteriorEstimate {
    /// Posterior for one player's history under the given mode.
    pub fn for_player(
        results: &[PlayerGameResult],
        prior: &TeamPrior,
        mode: EstimationMode,
        now: DateTime<Utc>,
        config: &PredictionConfig,
    ) -> PosteriorEstimate {
        let n_games = results.len();
        let (likelihood_mean, own_sigma, n) = match mode {
            EstimationMode::TimeWeighted => {
                let ws = weighted_stats(results, now, &config.decay);
                (ws.mean, ws.sigma, ws.effective_n)
            }
            EstimationMode::CohortComparison => {
                let nets: Vec<f64> =
                    results.iter().map(PlayerGameResult::net_units).collect();
                (stats::mean(&nets), stats::population_std_dev(&nets), n_games as f64)
            }
        };

        // A short or coincidentally-flat record must not look falsely
        // confident: substitute the team spread for the player's own.
        let likelihood_sigma =
            if n_games < config.posterior.own_sigma_min_games || own_sigma <= 0.0 {
                prior.sigma
            } else {
                own_sigma
            };

        let (posterior_mean, posterior_sigma) =
            if prior.sigma > 0.0 && likelihood_sigma > 0.0 {
                let prior_var = prior.sigma * prior.sigma;
                let likelihood_var = likelihood_sigma * likelihood_sigma;
                let posterior_var = 1.0 / (1.0 / prior_var + n / likelihood_var);
                let posterior_mean = posterior_var
                    * (prior.mean / prior_var + n * likelihood_mean / likelihood_var);
                (posterior_mean, posterior_var.sqrt())
            } else {
                // Nothing to blend.
                (likelihood_mean, likelihood_sigma)
            };

        let predictive_sigma =
            (posterior_sigma * posterior_sigma + likelihood_sigma * likelihood_sigma).sqrt();

        PosteriorEstimate {
            posterior_mean,
            posterior_sigma,
            predictive_sigma,
            n_effective: n,
            n_games,
        }
    }
}
