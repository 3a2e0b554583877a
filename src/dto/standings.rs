use serde::Serialize;
use utoipa::ToSchema;

use crate::{dto::session::PlayerSummary, state::game::Standing};

/// A ranked player. Equal totals share a rank.
#[derive(Debug, Serialize, ToSchema)]
pub struct StandingEntry {
    /// 1-based competition rank.
    pub rank: usize,
    /// Ranked player.
    pub player: PlayerSummary,
    /// Total the rank is based on.
    pub total: f64,
}

/// Players ordered by total, highest first.
#[derive(Debug, Serialize, ToSchema)]
pub struct StandingsResponse {
    /// Round the standings cover; absent for overall standings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<usize>,
    /// Highest total first.
    pub standings: Vec<StandingEntry>,
}

impl StandingsResponse {
    /// Rank already-sorted standings, using competition ranking (1, 1, 3).
    pub fn ranked(round: Option<usize>, standings: &[Standing]) -> Self {
        let mut entries: Vec<StandingEntry> = Vec::with_capacity(standings.len());
        for (index, standing) in standings.iter().enumerate() {
            let rank = match entries.last() {
                Some(previous) if previous.total == standing.total => previous.rank,
                _ => index + 1,
            };
            entries.push(StandingEntry {
                rank,
                player: (&standing.player).into(),
                total: standing.total,
            });
        }

        Self {
            round,
            standings: entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::game::Player;

    fn standing(name: &str, total: f64) -> Standing {
        Standing {
            player: Player::new(name),
            total,
        }
    }

    #[test]
    fn equal_totals_share_rank() {
        let standings = [
            standing("a", 9.0),
            standing("b", 4.0),
            standing("c", 4.0),
            standing("d", 1.0),
        ];

        let response = StandingsResponse::ranked(None, &standings);
        let ranks = response
            .standings
            .iter()
            .map(|entry| entry.rank)
            .collect::<Vec<_>>();
        assert_eq!(ranks, vec![1, 2, 2, 4]);
        assert_eq!(response.standings[1].player.name, "b");
    }
}
