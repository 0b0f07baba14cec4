//! Schedule generation.
//!
//! [`round_robin`] produces the complete pairing rotation, [`courts`]
//! distributes one round's pairs across the available courts, and
//! [`scheduler`] composes the two across all rounds — including the
//! suffix rebuild used when a player joins mid-tournament.

pub mod courts;
pub mod round_robin;
pub mod scheduler;

pub use courts::AllocatedRound;
pub use scheduler::BuiltSchedule;
