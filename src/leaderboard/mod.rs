//! Leaderboard computation.
//!
//! Standings are always recomputed from the full match history — there is
//! no incremental aggregate to fall out of sync with reopened or edited
//! matches. At tournament scale (tens of matches) the full pass is cheap.

pub mod export;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tournament::models::{Match, Pair, PlayerName, Points};

/// Accumulated standings for one player.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayerStat {
    pub name: PlayerName,
    pub wins: u32,
    pub losses: u32,
    pub points_for: Points,
    pub points_against: Points,
    pub point_difference: Points,
    /// Dense rank: ties on (wins, point difference, points for) share a
    /// rank and the next distinct line takes rank + 1.
    pub rank: usize,
}

/// Lenient score parse: the trimmed string as a whole integer, else 0.
///
/// Blank and non-numeric entries are a normal part of mid-entry state,
/// never an error.
#[must_use]
pub fn parse_score(raw: Option<&str>) -> Points {
    raw.map_or(0, |s| s.trim().parse().unwrap_or(0))
}

/// Recompute the full standings from scratch.
///
/// One accumulator per trimmed non-empty roster name. Duplicate roster
/// names merge into a single line (names are the key, by contract).
/// Only finished matches count, in any order — totals are
/// order-independent. The pair with the strictly higher score wins; an
/// equal score moves points but awards neither a win nor a loss. Names
/// appearing in a match but absent from the roster are skipped.
///
/// Sorted by wins, point difference, and points for, all descending;
/// lines tied on all three keys keep roster order and share a dense rank.
#[must_use]
pub fn compute(roster: &[PlayerName], rounds: &[Vec<Match>]) -> Vec<PlayerStat> {
    let mut stats: Vec<PlayerStat> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for name in roster {
        let name = name.trim();
        if name.is_empty() || index.contains_key(name) {
            continue;
        }
        index.insert(name.to_string(), stats.len());
        stats.push(PlayerStat {
            name: name.to_string(),
            ..PlayerStat::default()
        });
    }

    for m in rounds.iter().flatten().filter(|m| m.finished) {
        let score_a = parse_score(m.score_a.as_deref());
        let score_b = parse_score(m.score_b.as_deref());
        credit(&mut stats, &index, &m.team_a, score_a, score_b);
        credit(&mut stats, &index, &m.team_b, score_b, score_a);
    }

    for s in &mut stats {
        s.point_difference = s.points_for - s.points_against;
    }

    // Stable sort: full-key ties keep roster order.
    stats.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(b.point_difference.cmp(&a.point_difference))
            .then(b.points_for.cmp(&a.points_for))
    });
    assign_ranks(&mut stats);
    stats
}

fn credit(
    stats: &mut [PlayerStat],
    index: &HashMap<String, usize>,
    team: &Pair,
    own: Points,
    opposing: Points,
) {
    for player in team.players() {
        let Some(&i) = index.get(player.as_str()) else {
            continue;
        };
        let s = &mut stats[i];
        s.points_for += own;
        s.points_against += opposing;
        if own > opposing {
            s.wins += 1;
        } else if own < opposing {
            s.losses += 1;
        }
    }
}

fn assign_ranks(stats: &mut [PlayerStat]) {
    let mut rank = 0;
    let mut prev: Option<(u32, Points, Points)> = None;
    for s in stats {
        let key = (s.wins, s.point_difference, s.points_for);
        if prev != Some(key) {
            rank += 1;
            prev = Some(key);
        }
        s.rank = rank;
    }
}
