//! Plain-text results export.

use crate::leaderboard::PlayerStat;
use crate::tournament::models::Points;

const HEADER: &str = "🏆 Tournament Results 🏆";
const COLUMNS: &str = "Pos | Player | W | L | PF | PA | +/-";
const SEPARATOR: &str = "-----------------------------------------";

/// Icon shown in the position column: crown and medals for the podium,
/// `#N` below it.
#[must_use]
pub fn rank_icon(rank: usize) -> String {
    match rank {
        1 => "👑".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{n}"),
    }
}

fn signed(diff: Points) -> String {
    if diff > 0 {
        format!("+{diff}")
    } else {
        diff.to_string()
    }
}

/// Render the standings as a fixed-format text table, one row per player:
/// rank icon, name, wins, losses, points for, points against, signed
/// point differential.
#[must_use]
pub fn render(leaderboard: &[PlayerStat]) -> String {
    let rows = leaderboard
        .iter()
        .map(|p| {
            format!(
                "{} | {} | {} | {} | {} | {} | {}",
                rank_icon(p.rank),
                p.name,
                p.wins,
                p.losses,
                p.points_for,
                p.points_against,
                signed(p.point_difference)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{HEADER}\n\n{COLUMNS}\n{SEPARATOR}\n{rows}")
}
