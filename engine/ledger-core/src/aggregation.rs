//! Per-player, per-game net-result aggregation
//!
//! Builds the derived history the statistical engines consume: one
//! `PlayerGameResult` per (player, game) pair where the player has at least
//! one ledger entry. A player who never sat in a game has no entry for it
//! (absence, not a zero), so sample counts stay honest downstream.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::types::{Cents, EntryKind, GameId, GameSession, LedgerEntry, PlayerId, TeamId};

/// Money flow for one player in one game.
///
/// Only amounts that count toward net are accumulated here: buy-ins
/// unconditionally, add-ons and cash-outs once approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerGameResult {
    pub game_id: GameId,
    pub date: NaiveDate,
    pub buy_in_cents: Cents,
    pub add_on_cents: Cents,
    pub cash_out_cents: Cents,
}

impl PlayerGameResult {
    /// Net result: cash-out minus buy-in and add-on.
    pub fn net_cents(&self) -> Cents {
        self.cash_out_cents - self.buy_in_cents - self.add_on_cents
    }

    /// Net result in currency units, for the statistics layers.
    pub fn net_units(&self) -> f64 {
        self.net_cents() as f64 / 100.0
    }

    /// Total committed to the table this game.
    pub fn invested_cents(&self) -> Cents {
        self.buy_in_cents + self.add_on_cents
    }

    /// Invested amount in currency units.
    pub fn invested_units(&self) -> f64 {
        self.invested_cents() as f64 / 100.0
    }
}

/// A team's aggregated ledger history: games and date-ordered per-player
/// results. Built fresh per computation and discarded afterwards; nothing
/// is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct TeamHistory {
    team_id: TeamId,
    games: BTreeMap<GameId, GameSession>,
    results: BTreeMap<PlayerId, Vec<PlayerGameResult>>,
}

impl TeamHistory {
    /// Aggregate raw ledger records into per-player histories for one team.
    ///
    /// Sessions outside the team (or outside `year`, when given) are
    /// ignored, as are entries pointing at unknown games. An unknown team
    /// simply produces an empty history.
    pub fn build(
        team_id: TeamId,
        sessions: &[GameSession],
        entries: &[LedgerEntry],
        year: Option<i32>,
    ) -> Self {
        let games: BTreeMap<GameId, GameSession> = sessions
            .iter()
            .filter(|s| s.team_id == team_id)
            .filter(|s| year.map_or(true, |y| s.date.year() == y))
            .map(|s| (s.id, s.clone()))
            .collect();

        // Presence in a game is any entry for the (player, game) pair;
        // amounts accumulate only from entries that count toward net.
        let mut per_player: BTreeMap<PlayerId, BTreeMap<GameId, PlayerGameResult>> =
            BTreeMap::new();
        for entry in entries {
            let Some(game) = games.get(&entry.game_id) else {
                continue;
            };
            let result = per_player
                .entry(entry.player_id)
                .or_default()
                .entry(entry.game_id)
                .or_insert(PlayerGameResult {
                    game_id: entry.game_id,
                    date: game.date,
                    buy_in_cents: 0,
                    add_on_cents: 0,
                    cash_out_cents: 0,
                });
            if !entry.counts_toward_net() {
                continue;
            }
            match entry.kind {
                EntryKind::BuyIn => result.buy_in_cents += entry.amount_cents,
                EntryKind::AddOn => result.add_on_cents += entry.amount_cents,
                EntryKind::CashOut => result.cash_out_cents += entry.amount_cents,
            }
        }

        let results: BTreeMap<PlayerId, Vec<PlayerGameResult>> = per_player
            .into_iter()
            .map(|(player, by_game)| {
                let mut ordered: Vec<PlayerGameResult> = by_game.into_values().collect();
                ordered.sort_by_key(|r| (r.date, r.game_id));
                (player, ordered)
            })
            .collect();

        debug!(
            team_id,
            games = games.len(),
            players = results.len(),
            "aggregated team history"
        );

        Self { team_id, games, results }
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    /// Players with at least one game, in id order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.results.keys().copied()
    }

    /// Date-ordered results for one player; empty when the player never sat.
    pub fn results(&self, player: PlayerId) -> &[PlayerGameResult] {
        self.results.get(&player).map_or(&[], Vec::as_slice)
    }

    /// Per-game net results in currency units, date order.
    pub fn net_series(&self, player: PlayerId) -> Vec<f64> {
        self.results(player).iter().map(PlayerGameResult::net_units).collect()
    }

    pub fn games(&self) -> impl Iterator<Item = &GameSession> {
        self.games.values()
    }

    pub fn game(&self, id: GameId) -> Option<&GameSession> {
        self.games.get(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryStatus;
    use chrono::{TimeZone, Utc};

    fn session(id: GameId, team_id: TeamId, date: (i32, u32, u32)) -> GameSession {
        GameSession {
            id,
            team_id,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            started_at: None,
            finished_at: None,
            running: false,
        }
    }

    fn entry(
        player_id: PlayerId,
        game_id: GameId,
        kind: EntryKind,
        status: EntryStatus,
        amount: Cents,
    ) -> LedgerEntry {
        LedgerEntry {
            player_id,
            game_id,
            kind,
            amount_cents: amount,
            status,
            at: Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap(),
        }
    }

    #[test]
    fn nets_gate_on_approval_but_buy_in_always_counts() {
        let sessions = vec![session(1, 7, (2025, 6, 1))];
        let entries = vec![
            entry(1, 1, EntryKind::BuyIn, EntryStatus::Requested, 5000),
            entry(1, 1, EntryKind::AddOn, EntryStatus::Approved, 2000),
            entry(1, 1, EntryKind::AddOn, EntryStatus::Declined, 9999),
            entry(1, 1, EntryKind::CashOut, EntryStatus::Approved, 12000),
            entry(1, 1, EntryKind::CashOut, EntryStatus::Requested, 9999),
        ];
        let history = TeamHistory::build(7, &sessions, &entries, None);
        let results = history.results(1);
        assert_eq!(results.len(), 1);
        // 120.00 out - 50.00 buy-in - 20.00 approved add-on
        assert_eq!(results[0].net_cents(), 5000);
        assert_eq!(results[0].invested_cents(), 7000);
    }

    #[test]
    fn absence_is_not_a_zero() {
        let sessions = vec![session(1, 7, (2025, 6, 1)), session(2, 7, (2025, 6, 8))];
        let entries = vec![
            entry(1, 1, EntryKind::BuyIn, EntryStatus::Approved, 5000),
            entry(1, 2, EntryKind::BuyIn, EntryStatus::Approved, 5000),
            entry(2, 2, EntryKind::BuyIn, EntryStatus::Approved, 5000),
        ];
        let history = TeamHistory::build(7, &sessions, &entries, None);
        assert_eq!(history.results(1).len(), 2);
        assert_eq!(history.results(2).len(), 1);
        assert!(history.results(3).is_empty());
    }

    #[test]
    fn presence_from_any_entry_even_if_nothing_counts() {
        let sessions = vec![session(1, 7, (2025, 6, 1))];
        let entries = vec![entry(1, 1, EntryKind::CashOut, EntryStatus::Declined, 9999)];
        let history = TeamHistory::build(7, &sessions, &entries, None);
        let results = history.results(1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].net_cents(), 0);
    }

    #[test]
    fn year_filter_and_foreign_teams() {
        let sessions = vec![
            session(1, 7, (2024, 12, 30)),
            session(2, 7, (2025, 1, 6)),
            session(3, 8, (2025, 1, 6)),
        ];
        let entries = vec![
            entry(1, 1, EntryKind::BuyIn, EntryStatus::Approved, 5000),
            entry(1, 2, EntryKind::BuyIn, EntryStatus::Approved, 5000),
            entry(1, 3, EntryKind::BuyIn, EntryStatus::Approved, 5000),
        ];
        let history = TeamHistory::build(7, &sessions, &entries, Some(2025));
        assert_eq!(history.results(1).len(), 1);
        assert_eq!(history.results(1)[0].game_id, 2);
    }

    #[test]
    fn unknown_team_yields_empty_history() {
        let sessions = vec![session(1, 7, (2025, 6, 1))];
        let entries = vec![entry(1, 1, EntryKind::BuyIn, EntryStatus::Approved, 5000)];
        let history = TeamHistory::build(99, &sessions, &entries, None);
        assert!(history.is_empty());
        assert_eq!(history.games().count(), 0);
    }

    #[test]
    fn results_are_date_ordered() {
        let sessions = vec![
            session(5, 7, (2025, 3, 1)),
            session(2, 7, (2025, 1, 1)),
            session(9, 7, (2025, 2, 1)),
        ];
        let entries = vec![
            entry(1, 5, EntryKind::BuyIn, EntryStatus::Approved, 5000),
            entry(1, 2, EntryKind::BuyIn, EntryStatus::Approved, 5000),
            entry(1, 9, EntryKind::BuyIn, EntryStatus::Approved, 5000),
        ];
        let history = TeamHistory::build(7, &sessions, &entries, None);
        let order: Vec<GameId> = history.results(1).iter().map(|r| r.game_id).collect();
        assert_eq!(order, vec![2, 9, 5]);
    }
}
