//! # Ranking Engine
//!
//! Team-wide comparative statistics: per-player derived metrics (ROI,
//! volatility, win-share, hourly rate and friends), percentile ranks with
//! explicit directionality, and Low/Average/High tier labels over the
//! eligible cohort. A consumer of the aggregated ledger history, parallel
//! to, and independent of, the win-probability pipeline.

pub mod metrics;
pub mod ranking;

pub use metrics::{compute_metrics, PlayerMetrics, RankingConfig, TeamAverages};
pub use ranking::{rank_all, rank_metric, MetricKind, RankedMetric, TierLabels};

/// Current version of the ranking engine
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
