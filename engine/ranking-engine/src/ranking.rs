//! Percentile ranks and tier labels
//!
//! Ranks are 1-based with rank 1 the best under the metric's
//! directionality; ties keep their insertion order. Directionality is
//! always explicit: callers can override a metric's default framing, and
//! tier labels invert with it.

use ledger_core::PlayerId;
use serde::{Deserialize, Serialize};

use crate::metrics::PlayerMetrics;

/// Every ranked metric, with its default directionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricKind {
    StdDev,
    AvgBuyIn,
    AvgProfit,
    TotalBalance,
    RoiPct,
    WinSharePct,
    WinPct,
    HourlyWinrate,
    BestResult,
    WorstResult,
    VolatilityIndex,
}

impl MetricKind {
    pub fn all() -> &'static [MetricKind] {
        &[
            MetricKind::StdDev,
            MetricKind::AvgBuyIn,
            MetricKind::AvgProfit,
            MetricKind::TotalBalance,
            MetricKind::RoiPct,
            MetricKind::WinSharePct,
            MetricKind::WinPct,
            MetricKind::HourlyWinrate,
            MetricKind::BestResult,
            MetricKind::WorstResult,
            MetricKind::VolatilityIndex,
        ]
    }

    /// Default framing. Spread metrics read best when a steady player
    /// ranks first; everything else rewards the bigger number. Callers
    /// wanting the opposite framing pass their own flag to
    /// [`rank_metric`].
    pub fn lower_is_better(&self) -> bool {
        matches!(self, MetricKind::StdDev | MetricKind::VolatilityIndex)
    }

    pub fn value(&self, metrics: &PlayerMetrics) -> f64 {
        match self {
            MetricKind::StdDev => metrics.std_dev,
            MetricKind::AvgBuyIn => metrics.avg_buy_in,
            MetricKind::AvgProfit => metrics.avg_profit,
            MetricKind::TotalBalance => metrics.total_balance,
            MetricKind::RoiPct => metrics.roi_pct,
            MetricKind::WinSharePct => metrics.win_share_pct,
            MetricKind::WinPct => metrics.win_pct,
            MetricKind::HourlyWinrate => metrics.hourly_winrate,
            MetricKind::BestResult => metrics.best_result,
            MetricKind::WorstResult => metrics.worst_result,
            MetricKind::VolatilityIndex => metrics.volatility_index,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::StdDev => "std_dev",
            MetricKind::AvgBuyIn => "avg_buy_in",
            MetricKind::AvgProfit => "avg_profit",
            MetricKind::TotalBalance => "total_balance",
            MetricKind::RoiPct => "roi_pct",
            MetricKind::WinSharePct => "win_share_pct",
            MetricKind::WinPct => "win_pct",
            MetricKind::HourlyWinrate => "hourly_winrate",
            MetricKind::BestResult => "best_result",
            MetricKind::WorstResult => "worst_result",
            MetricKind::VolatilityIndex => "volatility_index",
        }
    }
}

/// Labels for the three percentile tiers, first third to last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLabels {
    pub first: String,
    pub second: String,
    pub last: String,
}

impl Default for TierLabels {
    fn default() -> Self {
        Self {
            first: "High".to_string(),
            second: "Average".to_string(),
            last: "Low".to_string(),
        }
    }
}

impl TierLabels {
    /// Swapped framing, for metrics where ranking first means the low end.
    pub fn inverted(&self) -> TierLabels {
        TierLabels {
            first: self.last.clone(),
            second: self.second.clone(),
            last: self.first.clone(),
        }
    }
}

/// One player's rank on one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMetric {
    pub player_id: PlayerId,
    pub value: f64,
    /// 1-based; rank 1 is best under the chosen directionality.
    pub rank: usize,
    pub cohort_size: usize,
    pub tier: String,
}

/// Rank a cohort on one metric.
///
/// The input order is the tie-break: the stable sort keeps earlier
/// entries ahead of equal values. Tiers split the cohort into thirds of
/// ranks (a cohort of 9 lands exactly 3/3/3).
pub fn rank_metric(
    values: &[(PlayerId, f64)],
    lower_is_better: bool,
    labels: &TierLabels,
) -> Vec<RankedMetric> {
    let cohort_size = values.len();
    let mut ordered: Vec<(PlayerId, f64)> = values.to_vec();
    ordered.sort_by(|a, b| {
        let ordering = a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal);
        if lower_is_better {
            ordering
        } else {
            ordering.reverse()
        }
    });

    ordered
        .into_iter()
        .enumerate()
        .map(|(idx, (player_id, value))| {
            let tier = if idx * 3 < cohort_size {
                labels.first.clone()
            } else if idx * 3 < cohort_size * 2 {
                labels.second.clone()
            } else {
                labels.last.clone()
            };
            RankedMetric { player_id, value, rank: idx + 1, cohort_size, tier }
        })
        .collect()
}

/// The team-wide ranking view: every metric ranked with its default
/// directionality and matching tier framing.
pub fn rank_all(
    metrics: &std::collections::BTreeMap<PlayerId, PlayerMetrics>,
) -> std::collections::BTreeMap<PlayerId, std::collections::BTreeMap<MetricKind, RankedMetric>> {
    let defaults = TierLabels::default();
    let mut view: std::collections::BTreeMap<
        PlayerId,
        std::collections::BTreeMap<MetricKind, RankedMetric>,
    > = metrics.keys().map(|&player| (player, Default::default())).collect();

    for &kind in MetricKind::all() {
        let values: Vec<(PlayerId, f64)> =
            metrics.iter().map(|(&player, m)| (player, kind.value(m))).collect();
        let labels =
            if kind.lower_is_better() { defaults.inverted() } else { defaults.clone() };
        for ranked in rank_metric(&values, kind.lower_is_better(), &labels) {
            if let Some(per_player) = view.get_mut(&ranked.player_id) {
                per_player.insert(kind, ranked);
            }
        }
    }
    view
}
