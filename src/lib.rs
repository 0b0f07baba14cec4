//! # Padel Americano
//!
//! An engine for Americano (round-robin doubles) tournaments: pairing
//! generation, court allocation, leaderboard computation, and the
//! tournament lifecycle state machine.
//!
//! The engine is synchronous, single-threaded, and does no I/O. An
//! embedding layer (web UI, TUI, anything) calls mutators on a
//! [`Tournament`], renders the state it exposes, and persists
//! [`TournamentSnapshot`]s after each mutation.
//!
//! ## Architecture
//!
//! - [`schedule::round_robin`]: circle-method pairing generation — every
//!   pair of players partners exactly once across the full schedule, with
//!   a rotating bye for odd rosters
//! - [`schedule::courts`]: distribution of a round's pairings across a
//!   limited number of courts, with the round's rest list
//! - [`schedule::scheduler`]: composes the two across all rounds, and
//!   splices a regenerated suffix into a live schedule when a player joins
//!   mid-tournament
//! - [`leaderboard`]: full-history recompute with dense ranking, plus the
//!   plain-text results export
//! - [`tournament`]: the entities, observer events, and the state machine
//!   that owns the canonical tournament state
//! - [`roster`]: the saved player pool used to pre-fill setup
//! - [`snapshot`]: the complete persisted-state contract
//!
//! ## Example
//!
//! ```
//! use padel_americano::Tournament;
//!
//! let mut tournament = Tournament::new();
//! for (slot, name) in ["Ana", "Luis", "Marta", "Pablo"].into_iter().enumerate() {
//!     tournament.update_player(slot, name).unwrap();
//! }
//! tournament.start().unwrap();
//!
//! // Four players on one court: three rounds, one match each.
//! assert_eq!(tournament.rounds().len(), 3);
//! assert_eq!(tournament.current_matches().len(), 1);
//! ```

/// Leaderboard computation and the results export.
pub mod leaderboard;
/// The saved player pool.
pub mod roster;
/// Schedule generation: round-robin pairings and court allocation.
pub mod schedule;
/// The persisted-state contract.
pub mod snapshot;
/// Tournament entities, events, and the state machine.
pub mod tournament;

pub use leaderboard::{PlayerStat, export};
pub use roster::PlayerPool;
pub use schedule::{AllocatedRound, BuiltSchedule};
pub use snapshot::TournamentSnapshot;
pub use tournament::{
    Tournament, TournamentEvent,
    models::{
        DEFAULT_COURTS, DEFAULT_PLAYER_SLOTS, MIN_PLAYERS, MIN_PLAYERS_FOR_SECOND_COURT, Match,
        Pair, PlayerName, Points, RebuildConsent, Side, Stage, TournamentError,
    },
};
