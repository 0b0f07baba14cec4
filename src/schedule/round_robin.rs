//! Round-robin pairing generation via the circle method.

use crate::tournament::models::{Pair, PlayerName};

/// Generate the complete pairing schedule for `players`.
///
/// The first player stays fixed while the rest rotate one position per
/// round (the last slot moves to slot 1). Round `r` pairs slot `i` with
/// slot `total - 1 - i`, so every unordered pair of players partners
/// exactly once across the schedule. Odd rosters get a bye slot; pairs
/// containing the bye are omitted, leaving that player out of the round
/// before courts are even considered.
///
/// An even roster of `n` players yields `n - 1` rounds, an odd one `n`.
/// Output is deterministic in input order: the same order always produces
/// the same schedule, and reordering players is a different schedule by
/// contract.
#[must_use]
pub fn generate(players: &[PlayerName]) -> Vec<Vec<Pair>> {
    if players.len() < 2 {
        return Vec::new();
    }

    // The bye is an empty slot, never a sentinel name.
    let mut slots: Vec<Option<PlayerName>> = players.iter().cloned().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let total = slots.len();

    let mut rounds = Vec::with_capacity(total - 1);
    for _ in 0..total - 1 {
        let mut pairs = Vec::with_capacity(total / 2);
        for i in 0..total / 2 {
            if let (Some(a), Some(b)) = (&slots[i], &slots[total - 1 - i]) {
                pairs.push(Pair(a.clone(), b.clone()));
            }
        }
        rounds.push(pairs);

        if let Some(last) = slots.pop() {
            slots.insert(1, last);
        }
    }
    rounds
}
