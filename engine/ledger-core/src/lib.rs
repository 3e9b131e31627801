//! # Ledger Core
//!
//! Domain types and per-game net-result aggregation for recurring poker
//! cash-game sessions.
//!
//! This crate owns the read-only view of the ledger: buy-ins, add-ons and
//! cash-outs grouped into game sessions, and the derived per-player,
//! per-game net results that the prediction and ranking engines consume.
//! Nothing here mutates ledger state.

pub mod aggregation;
pub mod error;
pub mod snapshot;
pub mod stats;
pub mod types;

pub use aggregation::{PlayerGameResult, TeamHistory};
pub use error::{LedgerError, Result};
pub use snapshot::LedgerSnapshot;
pub use types::{
    Cents, EntryKind, EntryStatus, GameId, GameSession, LedgerEntry, PlayerId, TeamId,
};

/// Current version of the ledger core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
