//! # Configuration Management
//!
//! Every tunable constant of the prediction pipeline lives here. The
//! defaults are the production values; none of them is a law of the
//! domain, and a TOML file can override any of them.

use serde::{Deserialize, Serialize};

/// Main configuration for the prediction engine
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PredictionConfig {
    /// Recency weighting configuration
    pub decay: DecayConfig,
    /// Team prior configuration
    pub prior: PriorConfig,
    /// Posterior update configuration
    pub posterior: PosteriorConfig,
    /// Reliability tier configuration
    pub reliability: ReliabilityConfig,
}

/// Recency weighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayConfig {
    /// Window (days) over which games keep near-full weight
    pub full_weight_days: f64,
    /// Total discount applied linearly across the full-weight window
    pub recent_discount: f64,
    /// Exponential decay rate per day beyond the window
    pub tail_decay_rate: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        // 1.0 -> 0.95 over six months, then exponential: a three-year-old
        // game retains roughly a fifth of the weight of a fresh one.
        Self { full_weight_days: 180.0, recent_discount: 0.05, tail_decay_rate: 0.0018 }
    }
}

/// Team prior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorConfig {
    /// Minimum games for a player to inform the team prior. Deliberately
    /// lower than `PosteriorConfig::own_sigma_min_games`: the prior
    /// benefits from moderately-experienced players even when their
    /// individual variance is not yet trustworthy.
    pub min_games: usize,
    /// Prior mean when no player qualifies
    pub fallback_mean: f64,
    /// Prior spread when no player qualifies, in currency units. A
    /// "typical buy-in-sized spread". A tunable, not a domain constant.
    pub fallback_sigma: f64,
}

impl Default for PriorConfig {
    fn default() -> Self {
        Self { min_games: 3, fallback_mean: 0.0, fallback_sigma: 100.0 }
    }
}

/// Posterior update configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosteriorConfig {
    /// Below this many games a player's own sigma is replaced by the team
    /// prior sigma, so a few coincidentally-similar results cannot look
    /// falsely narrow.
    pub own_sigma_min_games: usize,
}

impl Default for PosteriorConfig {
    fn default() -> Self {
        Self { own_sigma_min_games: 10 }
    }
}

/// Reliability tier configuration (raw game counts)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReliabilityConfig {
    /// Below this many games a prediction is labeled Low
    pub low_below: usize,
    /// Below this many games a prediction is labeled Moderate
    pub moderate_below: usize,
}

impl Default for ReliabilityConfig {
    fn default() -> Self {
        Self { low_below: 5, moderate_below: 15 }
    }
}

impl PredictionConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &str) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: PredictionConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &str) -> Result<(), anyhow::Error> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_production_constants() {
        let config = PredictionConfig::default();
        assert_eq!(config.decay.full_weight_days, 180.0);
        assert_eq!(config.decay.recent_discount, 0.05);
        assert_eq!(config.decay.tail_decay_rate, 0.0018);
        assert_eq!(config.prior.min_games, 3);
        assert_eq!(config.prior.fallback_sigma, 100.0);
        assert_eq!(config.posterior.own_sigma_min_games, 10);
        assert_eq!(config.reliability.low_below, 5);
        assert_eq!(config.reliability.moderate_below, 15);
    }

    #[test]
    fn toml_round_trip() {
        let config = PredictionConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: PredictionConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.prior.min_games, config.prior.min_games);
        assert_eq!(parsed.decay.tail_decay_rate, config.decay.tail_decay_rate);
    }
}
