//! Observer-facing events.
//!
//! Mutating the tournament and notifying whoever renders or persists it
//! are two separate steps: mutators queue events here and the embedding
//! layer drains them when it is ready to react.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::models::PlayerName;

/// Events emitted by the state machine as side notes to state changes.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum TournamentEvent {
    Started {
        players: usize,
        courts: usize,
        rounds: usize,
    },
    MatchFinished {
        round: usize,
        court: usize,
    },
    MatchReopened {
        round: usize,
        court: usize,
    },
    RoundChanged {
        round: usize,
    },
    PlayerAdded {
        name: PlayerName,
    },
    ScheduleRebuilt {
        from_round: usize,
    },
    TournamentFinished,
    Restarted,
    Reset,
}

impl fmt::Display for TournamentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Started {
                players,
                courts,
                rounds,
            } => format!("tournament started: {players} players, {courts} court(s), {rounds} rounds"),
            Self::MatchFinished { round, court } => {
                format!("round {}: court {court} finished", round + 1)
            }
            Self::MatchReopened { round, court } => {
                format!("round {}: court {court} reopened", round + 1)
            }
            Self::RoundChanged { round } => format!("now on round {}", round + 1),
            Self::PlayerAdded { name } => format!("{name} joined the tournament"),
            Self::ScheduleRebuilt { from_round } => {
                format!("rounds from {} on were rebuilt", from_round + 1)
            }
            Self::TournamentFinished => "tournament finished".to_string(),
            Self::Restarted => "playing again with the same roster".to_string(),
            Self::Reset => "back to setup".to_string(),
        };
        write!(f, "{repr}")
    }
}
