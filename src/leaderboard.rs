//! Scores and dense ranking of a game's participants.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::AttackResult;
use crate::config::FLEET_SUNK_BONUS;
use crate::player::Player;

/// A participant with their accumulated score and rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerWithScore {
    /// Public projection; never carries the secret.
    pub player: Player,
    pub score: i32,
    /// Dense rank, starting at 1.
    pub position: usize,
}

/// One leaderboard row as handed to collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct LeaderboardEntry {
    pub name: String,
    pub position: usize,
    pub score: i32,
    pub is_computer: bool,
}

impl From<&PlayerWithScore> for LeaderboardEntry {
    fn from(row: &PlayerWithScore) -> Self {
        LeaderboardEntry {
            name: String::from(row.player.name()),
            position: row.position,
            score: row.score,
            is_computer: row.player.is_computer(),
        }
    }
}

/// Fold a shot history into a score, then apply the fleet adjustments.
pub fn score(shots: &[AttackResult], own_fleet_sunk: bool, opponent_fleet_sunk: bool) -> i32 {
    let mut total: i32 = shots.iter().map(|s| s.outcome.points()).sum();
    if own_fleet_sunk {
        total -= FLEET_SUNK_BONUS;
    }
    if opponent_fleet_sunk {
        total += FLEET_SUNK_BONUS;
    }
    total
}

/// Order by descending score and assign dense ranks: equal scores share a
/// position and the next lower score is one position further down.
/// Equal scores keep their input order.
pub fn rank_by_score(scores: Vec<(Player, i32)>) -> Vec<PlayerWithScore> {
    let mut scores = scores;
    scores.sort_by(|a, b| b.1.cmp(&a.1));

    let mut ranked = Vec::with_capacity(scores.len());
    let mut position = 0;
    let mut previous = None;
    for (player, score) in scores {
        if previous != Some(score) {
            position += 1;
            previous = Some(score);
        }
        ranked.push(PlayerWithScore {
            player: player.public(),
            score,
            position,
        });
    }
    ranked
}
