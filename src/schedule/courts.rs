//! Distribution of one round's pairings across a limited number of courts.

use std::collections::HashSet;

use crate::tournament::models::{Match, Pair, PlayerName};

/// One allocated round: court-numbered matches plus the players resting.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AllocatedRound {
    pub matches: Vec<Match>,
    pub resting: Vec<PlayerName>,
}

/// Assign `pairs` to up to `courts` matches, in generation order.
///
/// Match `k` consumes pairs `2k` and `2k + 1` and plays on court `k + 1`.
/// Pairs left over — fewer than two remaining, or beyond what the courts
/// hold — sit the round out. Allocation never picks favorites: the tail
/// of the pair list is simply dropped.
///
/// The rest list is recomputed in full as `eligible` minus everyone
/// playing, kept in `eligible` order. It is never carried over from a
/// previous call.
#[must_use]
pub fn allocate(pairs: &[Pair], eligible: &[PlayerName], courts: usize) -> AllocatedRound {
    let mut matches = Vec::with_capacity(courts.min(pairs.len() / 2));
    let mut playing: HashSet<&str> = HashSet::new();

    for (k, teams) in pairs.chunks_exact(2).take(courts).enumerate() {
        for player in teams[0].players().chain(teams[1].players()) {
            playing.insert(player.as_str());
        }
        matches.push(Match::new(teams[0].clone(), teams[1].clone(), k + 1));
    }

    let resting = eligible
        .iter()
        .filter(|p| !playing.contains(p.as_str()))
        .cloned()
        .collect();

    AllocatedRound { matches, resting }
}
