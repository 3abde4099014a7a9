//! Append-only battle ledger, keyed by Pymon nickname. Entries are never
//! mutated or removed once recorded; reporting is a pure aggregation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One settled match, as it was recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BattleRecord {
    pub timestamp: DateTime<Utc>,
    pub opponent: String,
    pub wins: u8,
    pub draws: u8,
    pub losses: u8,
}

/// Aggregated view of one Pymon's ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PymonReport {
    pub nickname: String,
    pub entries: Vec<BattleRecord>,
    pub total_wins: u32,
    pub total_draws: u32,
    pub total_losses: u32,
}

/// The session-wide ledger. Keyed by nickname; BTreeMap keeps reports in a
/// stable order.
#[derive(Debug, Default)]
pub struct BattleStats {
    battles: BTreeMap<String, Vec<BattleRecord>>,
}

impl BattleStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one timestamped record under the given nickname.
    pub fn record(&mut self, nickname: &str, opponent: &str, wins: u8, draws: u8, losses: u8) {
        self.battles
            .entry(nickname.to_string())
            .or_default()
            .push(BattleRecord {
                timestamp: Utc::now(),
                opponent: opponent.to_string(),
                wins,
                draws,
                losses,
            });
    }

    /// Ordered entries plus running totals, per nickname. Read-only.
    pub fn report(&self) -> Vec<PymonReport> {
        self.battles
            .iter()
            .map(|(nickname, entries)| PymonReport {
                nickname: nickname.clone(),
                entries: entries.clone(),
                total_wins: entries.iter().map(|e| u32::from(e.wins)).sum(),
                total_draws: entries.iter().map(|e| u32::from(e.draws)).sum(),
                total_losses: entries.iter().map(|e| u32::from(e.losses)).sum(),
            })
            .collect()
    }

    /// Total number of recorded matches across all Pymons.
    pub fn match_count(&self) -> usize {
        self.battles.values().map(Vec::len).sum()
    }
}
