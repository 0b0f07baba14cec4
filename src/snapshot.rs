//! The persisted-state contract.
//!
//! A persistence layer only needs to round-trip [`TournamentSnapshot`]
//! verbatim: load it, hand it back, same tournament. Loading is
//! infallible — missing or malformed input falls back to the initial
//! setup state, field by field or wholesale.

use serde::{Deserialize, Serialize};

use crate::leaderboard::PlayerStat;
use crate::tournament::models::{DEFAULT_COURTS, DEFAULT_PLAYER_SLOTS, Match, PlayerName, Stage};

/// Complete serializable tournament state.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct TournamentSnapshot {
    pub stage: Stage,
    pub players: Vec<PlayerName>,
    pub num_courts: usize,
    pub rounds: Vec<Vec<Match>>,
    pub current_round: usize,
    pub leaderboard: Vec<PlayerStat>,
    pub rests_by_round: Vec<Vec<PlayerName>>,
}

impl Default for TournamentSnapshot {
    fn default() -> Self {
        Self {
            stage: Stage::Setup,
            players: vec![PlayerName::new(); DEFAULT_PLAYER_SLOTS],
            num_courts: DEFAULT_COURTS,
            rounds: Vec::new(),
            current_round: 0,
            leaderboard: Vec::new(),
            rests_by_round: Vec::new(),
        }
    }
}

impl TournamentSnapshot {
    /// Parse a stored snapshot, falling back to the default initial state
    /// on any parse failure.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Serialize for storage.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
