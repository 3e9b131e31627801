//! Team-wide prior estimation
//!
//! The prior answers "what does a typical session result look like around
//! this table" and anchors players whose own history is too thin to trust.

use ledger_core::stats;
use ledger_core::TeamHistory;
use tracing::debug;

use crate::config::PriorConfig;

/// Team-wide prior over per-game net results, in currency units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamPrior {
    pub mean: f64,
    pub sigma: f64,
}

impl TeamPrior {
    /// Estimate the prior from every player with enough history.
    ///
    /// Qualifying players contribute their unweighted mean and population
    /// standard deviation; the prior is the average of each. The
    /// qualification bar sits below the posterior's own-sigma threshold on
    /// purpose; see `PriorConfig::min_games`. With no qualifiers, or a
    /// degenerate average sigma, the configured fallback takes over.
    pub fn estimate(history: &TeamHistory, config: &PriorConfig) -> TeamPrior {
        let mut means = Vec::new();
        let mut sigmas = Vec::new();
        for player in history.players() {
            let nets = history.net_series(player);
            if nets.len() >= config.min_games {
                means.push(stats::mean(&nets));
                sigmas.push(stats::population_std_dev(&nets));
            }
        }

        if means.is_empty() {
            debug!("no qualifying players, using fallback prior");
            return TeamPrior { mean: config.fallback_mean, sigma: config.fallback_sigma };
        }

        let mean = stats::mean(&means);
        let sigma = stats::mean(&sigmas);
        if sigma <= 0.0 {
            debug!("degenerate average sigma, using fallback prior");
            return TeamPrior { mean: config.fallback_mean, sigma: config.fallback_sigma };
        }

        debug!(qualifying = means.len(), mean, sigma, "estimated team prior");
        TeamPrior { mean, sigma }
    }
}
