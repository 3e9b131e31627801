//! # Prediction Engine
//!
//! Converts a team's noisy, small-sample, zero-sum-constrained history of
//! per-game net results into a calibrated probability of each player
//! finishing the next session in profit.
//!
//! The pipeline runs strictly forward: recency-weighted statistics, a
//! team-wide prior, a conjugate normal-normal posterior per player, a
//! zero-sum recentering across the seated pool, and finally the win
//! probability itself. Every stage is a pure function of its inputs and an
//! injected "now"; nothing is cached or persisted between calls.

pub mod config;
pub mod decay;
pub mod posterior;
pub mod predictor;
pub mod prior;
pub mod win_prob;
pub mod zero_sum;


pub use config::{
    DecayConfig, PosteriorConfig, PredictionConfig, PriorConfig, ReliabilityConfig,
};
pub use decay::{recency_weight, weighted_stats, WeightedStats};
pub use posterior::{EstimationMode, PosteriorEstimate};
pub use predictor::{PlayerPrediction, SessionPredictor};
pub use prior::TeamPrior;
pub use win_prob::{win_probability, Reliability};

/// Current version of the prediction engine
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
