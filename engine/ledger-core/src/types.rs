//! Core ledger types
//!
//! Monetary amounts are integer cents throughout the ledger; the statistics
//! layers convert to `f64` currency units at their own boundary.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type PlayerId = u64;
pub type GameId = u64;
pub type TeamId = u64;
pub type Cents = i64;

/// What a ledger entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    BuyIn,
    AddOn,
    CashOut,
}

/// Approval state of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    Requested,
    Approved,
    Declined,
}

/// One immutable ledger record: a buy-in, add-on or cash-out for a player
/// in a specific game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub kind: EntryKind,
    pub amount_cents: Cents,
    pub status: EntryStatus,
    pub at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Whether this entry contributes to a player's net result.
    ///
    /// A buy-in is an immediate commitment and always counts; add-ons and
    /// cash-outs count only once approved.
    pub fn counts_toward_net(&self) -> bool {
        match self.kind {
            EntryKind::BuyIn => true,
            EntryKind::AddOn | EntryKind::CashOut => self.status == EntryStatus::Approved,
        }
    }

    /// Contribution to net result: cash-outs are money in, buy-ins and
    /// add-ons are money out.
    pub fn signed_amount_cents(&self) -> Cents {
        match self.kind {
            EntryKind::CashOut => self.amount_cents,
            EntryKind::BuyIn | EntryKind::AddOn => -self.amount_cents,
        }
    }
}

/// One sitting of a team's recurring cash game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub id: GameId,
    pub team_id: TeamId,
    /// Calendar date the game was played on; drives recency weighting.
    pub date: NaiveDate,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub running: bool,
}

impl GameSession {
    /// Session length in hours, when both timestamps are known.
    ///
    /// Returns `None` for unfinished games or inconsistent timestamps, so
    /// hourly-rate metrics skip them instead of dividing by garbage.
    pub fn duration_hours(&self) -> Option<f64> {
        let (start, finish) = (self.started_at?, self.finished_at?);
        let secs = (finish - start).num_seconds();
        if secs <= 0 {
            return None;
        }
        Some(secs as f64 / 3600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(kind: EntryKind, status: EntryStatus, amount: Cents) -> LedgerEntry {
        LedgerEntry {
            player_id: 1,
            game_id: 1,
            kind,
            amount_cents: amount,
            status,
            at: Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap(),
        }
    }

    #[test]
    fn buy_in_counts_regardless_of_status() {
        for status in [EntryStatus::Requested, EntryStatus::Approved, EntryStatus::Declined] {
            assert!(entry(EntryKind::BuyIn, status, 5000).counts_toward_net());
        }
    }

    #[test]
    fn add_on_and_cash_out_count_only_when_approved() {
        for kind in [EntryKind::AddOn, EntryKind::CashOut] {
            assert!(entry(kind, EntryStatus::Approved, 5000).counts_toward_net());
            assert!(!entry(kind, EntryStatus::Requested, 5000).counts_toward_net());
            assert!(!entry(kind, EntryStatus::Declined, 5000).counts_toward_net());
        }
    }

    #[test]
    fn signed_amounts() {
        assert_eq!(entry(EntryKind::BuyIn, EntryStatus::Approved, 5000).signed_amount_cents(), -5000);
        assert_eq!(entry(EntryKind::AddOn, EntryStatus::Approved, 2000).signed_amount_cents(), -2000);
        assert_eq!(entry(EntryKind::CashOut, EntryStatus::Approved, 9000).signed_amount_cents(), 9000);
    }

    #[test]
    fn duration_requires_both_timestamps_in_order() {
        let mut game = GameSession {
            id: 1,
            team_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            started_at: None,
            finished_at: None,
            running: false,
        };
        assert_eq!(game.duration_hours(), None);

        game.started_at = Some(Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap());
        assert_eq!(game.duration_hours(), None);

        game.finished_at = Some(Utc.with_ymd_and_hms(2025, 6, 2, 1, 30, 0).unwrap());
        let hours = game.duration_hours().unwrap();
        assert!((hours - 5.5).abs() < 1e-9);

        game.finished_at = Some(Utc.with_ymd_and_hms(2025, 6, 1, 19, 0, 0).unwrap());
        assert_eq!(game.duration_hours(), None);
    }
}
