//! Ledger snapshot I/O
//!
//! A snapshot is the JSON form of one consistent read of the ledger:
//! every game session and every entry for some set of teams. The engines
//! themselves never touch the filesystem; snapshots exist so tools and
//! tests can hand them plain in-memory data.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::types::{GameSession, LedgerEntry};

/// A consistent point-in-time read of the ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub sessions: Vec<GameSession>,
    pub entries: Vec<LedgerEntry>,
}

impl LedgerSnapshot {
    /// Load a snapshot from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let snapshot: LedgerSnapshot = serde_json::from_str(&content)?;
        info!(
            sessions = snapshot.sessions.len(),
            entries = snapshot.entries.len(),
            "loaded ledger snapshot from {:?}",
            path.as_ref()
        );
        Ok(snapshot)
    }

    /// Save a snapshot to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
