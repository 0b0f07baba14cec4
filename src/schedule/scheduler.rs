//! Composition of pairing generation and court allocation across rounds,
//! including the suffix rebuild used for mid-tournament insertion.

use log::{debug, info};

use crate::schedule::{courts, round_robin};
use crate::tournament::models::{MIN_PLAYERS, Match, PlayerName};

/// A complete generated schedule: one match list and one rest list per
/// round. Both sequences come from a single generation pass and always
/// have equal length.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BuiltSchedule {
    pub rounds: Vec<Vec<Match>>,
    pub rests_by_round: Vec<Vec<PlayerName>>,
}

impl BuiltSchedule {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

/// Trim names and drop empty ones, keeping input order.
#[must_use]
pub fn valid_players(players: &[PlayerName]) -> Vec<PlayerName> {
    players
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the full tournament schedule for `players` on `courts` courts.
///
/// Fewer than four valid names yields an empty schedule; the caller
/// surfaces the validation failure.
#[must_use]
pub fn build(players: &[PlayerName], courts: usize) -> BuiltSchedule {
    let valid = valid_players(players);
    if valid.len() < MIN_PLAYERS {
        return BuiltSchedule::default();
    }

    let pair_rounds = round_robin::generate(&valid);
    let mut schedule = BuiltSchedule {
        rounds: Vec::with_capacity(pair_rounds.len()),
        rests_by_round: Vec::with_capacity(pair_rounds.len()),
    };
    for pairs in &pair_rounds {
        let allocated = courts::allocate(pairs, &valid, courts);
        schedule.rounds.push(allocated.matches);
        schedule.rests_by_round.push(allocated.resting);
    }
    debug!(
        "built schedule: {} players, {} courts, {} rounds",
        valid.len(),
        courts,
        schedule.rounds.len()
    );
    schedule
}

/// Replace every round after `current_round` with freshly generated ones
/// for the updated roster.
///
/// Rounds up to and including `current_round` keep their matches and
/// scores untouched. The whole schedule is regenerated from scratch and
/// only its suffix is adopted, so the two sequences stay in lockstep; the
/// replacement restarts the rotation, which means partnerships may repeat
/// across the boundary.
pub fn rebuild_from(
    rounds: &mut Vec<Vec<Match>>,
    rests_by_round: &mut Vec<Vec<PlayerName>>,
    current_round: usize,
    players: &[PlayerName],
    courts: usize,
) {
    let fresh = build(players, courts);
    let boundary = (current_round + 1).min(rounds.len());

    rounds.truncate(boundary);
    rests_by_round.truncate(boundary);
    if fresh.rounds.len() > boundary {
        rounds.extend(fresh.rounds.into_iter().skip(boundary));
        rests_by_round.extend(fresh.rests_by_round.into_iter().skip(boundary));
    }
    info!(
        "rebuilt schedule from round {}: now {} rounds",
        boundary + 1,
        rounds.len()
    );
}
