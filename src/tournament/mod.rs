//! Tournament lifecycle: entities, observer events, and the state
//! machine that owns the canonical tournament state.
//!
//! The lifecycle runs `Setup` → `Playing` → `Finished`; a finished
//! tournament can replay with the same roster or reset to a fresh setup.

pub mod events;
pub mod models;
pub mod state_machine;

pub use events::TournamentEvent;
pub use models::{
    DEFAULT_COURTS, DEFAULT_PLAYER_SLOTS, MIN_PLAYERS, MIN_PLAYERS_FOR_SECOND_COURT, Match, Pair,
    PlayerName, Points, RebuildConsent, Side, Stage, TournamentError,
};
pub use state_machine::Tournament;
