//! Core tournament entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Players are keyed by their (trimmed) display name throughout the
/// engine. Uniqueness is not enforced: two slots with the same name share
/// one leaderboard line.
pub type PlayerName = String;

/// Match points. Scores arrive as raw strings and are parsed leniently,
/// so the wide signed type keeps the arithmetic unsurprising.
pub type Points = i64;

/// Doubles needs two full pairs per match.
pub const MIN_PLAYERS: usize = 4;
/// Number of empty name slots a fresh setup screen offers.
pub const DEFAULT_PLAYER_SLOTS: usize = 4;
pub const DEFAULT_COURTS: usize = 1;
/// A second court only makes sense once two simultaneous matches are
/// possible every round.
pub const MIN_PLAYERS_FOR_SECOND_COURT: usize = 8;

/// Two partners playing together for one match.
///
/// The pair is unordered in meaning; member order only reflects the
/// rotation that produced it.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Pair(pub PlayerName, pub PlayerName);

impl Pair {
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0 == name || self.1 == name
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerName> {
        [&self.0, &self.1].into_iter()
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.0, self.1)
    }
}

/// Which side of a match a score belongs to.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Side {
    A,
    B,
}

/// One court assignment within a round.
///
/// Scores are kept as the raw strings the caller entered; `None` means no
/// score yet. A match finishes only once both scores are present, and can
/// be reopened afterwards.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Match {
    pub team_a: Pair,
    pub team_b: Pair,
    /// 1-based court number within the round.
    pub court: usize,
    #[serde(default)]
    pub score_a: Option<String>,
    #[serde(default)]
    pub score_b: Option<String>,
    #[serde(default)]
    pub finished: bool,
}

impl Match {
    #[must_use]
    pub fn new(team_a: Pair, team_b: Pair, court: usize) -> Self {
        Self {
            team_a,
            team_b,
            court,
            score_a: None,
            score_b: None,
            finished: false,
        }
    }

    #[must_use]
    pub fn score(&self, side: Side) -> Option<&str> {
        match side {
            Side::A => self.score_a.as_deref(),
            Side::B => self.score_b.as_deref(),
        }
    }

    /// Store a raw score string. Blank input clears the side's score.
    pub fn set_score(&mut self, side: Side, value: &str) {
        let value = value.trim();
        let slot = match side {
            Side::A => &mut self.score_a,
            Side::B => &mut self.score_b,
        };
        *slot = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    /// Both sides have entered something (not necessarily numeric).
    #[must_use]
    pub fn scores_complete(&self) -> bool {
        self.score_a.is_some() && self.score_b.is_some()
    }

    /// All four participants, team A first.
    pub fn players(&self) -> impl Iterator<Item = &PlayerName> {
        self.team_a.players().chain(self.team_b.players())
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "court {}: {} vs {}", self.court, self.team_a, self.team_b)
    }
}

/// Tournament lifecycle stage.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Editing the roster and settings; nothing scheduled yet.
    #[default]
    Setup,
    /// Rounds in progress.
    Playing,
    /// Final standings frozen; only play-again or a full reset follow.
    Finished,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Setup => "setup",
            Self::Playing => "playing",
            Self::Finished => "finished",
        };
        write!(f, "{repr}")
    }
}

/// Whether the caller has surfaced the repeat-partner warning for a
/// mid-tournament insertion and had it accepted.
///
/// Rebuilding future rounds restarts the rotation, so players may repeat
/// partners across the boundary; the insert is refused until the caller
/// acknowledges that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RebuildConsent {
    Acknowledged,
    NotAcknowledged,
}

/// Errors produced by tournament operations. None are fatal: every error
/// leaves the tournament state untouched.
#[derive(Debug, Eq, Error, PartialEq)]
pub enum TournamentError {
    #[error("need {needed}+ players, have {current}")]
    InsufficientPlayers { needed: usize, current: usize },
    #[error("wrong stage: expected {expected}, got {actual}")]
    InvalidStage { expected: Stage, actual: Stage },
    #[error("no match at index {0} in the current round")]
    MatchNotFound(usize),
    #[error("both scores must be entered first")]
    ScoresIncomplete,
    #[error("match already finished; reopen it to edit the score")]
    MatchAlreadyFinished,
    #[error("player name is empty")]
    EmptyPlayerName,
    #[error("rebuilding future rounds requires acknowledging the repeat-partner warning")]
    RebuildConsentRequired,
    #[error("can't remove below {MIN_PLAYERS} player slots")]
    MinimumSlotsReached,
    #[error("no player slot at index {0}")]
    SlotNotFound(usize),
}
