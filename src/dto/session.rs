use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::catalog::GameDefinitionSummary,
    state::{
        ScoreModel,
        game::Player,
        model::{MAX_PLAYERS, MAX_ROUNDS},
    },
};

/// Payload starting a new scoring session.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct StartSessionRequest {
    /// Name of a game from the loaded catalog.
    #[serde(default)]
    pub game: Option<String>,
    /// Roster size, at most [`MAX_PLAYERS`].
    #[validate(range(min = 1, max = MAX_PLAYERS))]
    pub player_count: usize,
    /// Overrides the game's default round count when it supports rounds.
    #[serde(default)]
    #[validate(range(min = 1, max = MAX_ROUNDS))]
    pub round_count: Option<usize>,
}

/// Payload renaming a player.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RenamePlayerRequest {
    /// New display name; need not be unique.
    pub name: String,
}

/// Score entry for one cell. `value` may be any JSON value; non-numbers count as 0.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetScoreRequest {
    /// 0-based round index.
    pub round: usize,
    /// Player being scored.
    pub player_id: Uuid,
    /// Field key of the selected game.
    pub field: String,
    /// Number or numeric string.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub value: Value,
}

/// Stored value and refreshed totals after a score entry.
#[derive(Debug, Serialize, ToSchema)]
pub struct SetScoreResponse {
    /// 0-based round index.
    pub round: usize,
    /// Player scored.
    pub player_id: Uuid,
    /// Field key.
    pub field: String,
    /// Stored value after coercion.
    pub value: f64,
    /// Player total for this round.
    pub round_total: f64,
    /// Player total across all rounds.
    pub overall_total: f64,
}

/// Player identity as exposed by the API.
#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct PlayerSummary {
    /// Stable player id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
}

/// Result of a first-player draw.
#[derive(Debug, Serialize, ToSchema)]
pub struct FirstPlayerResponse {
    /// Absent when the roster is empty.
    pub first_player: Option<PlayerSummary>,
}

/// Field values of one player in one round.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct PlayerRoundScores {
    /// Player id.
    pub player_id: Uuid,
    /// Field key to value.
    pub fields: IndexMap<String, f64>,
    /// Round total.
    pub total: f64,
}

/// Scores of every player for one round.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct RoundScoresSummary {
    /// 0-based round index.
    pub round: usize,
    /// Scores in roster order.
    pub players: Vec<PlayerRoundScores>,
}

/// Everything the presentation layer binds to for the current session.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct SessionSnapshot {
    /// Selected game; absent before the first session.
    pub game: Option<GameDefinitionSummary>,
    /// Roster in seating order.
    pub players: Vec<PlayerSummary>,
    /// Player who starts.
    pub first_player: Option<PlayerSummary>,
    /// Rounds in the session.
    pub round_count: usize,
    /// Per-round scores, first round first.
    pub rounds: Vec<RoundScoresSummary>,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
        }
    }
}

impl From<&ScoreModel> for SessionSnapshot {
    fn from(model: &ScoreModel) -> Self {
        let rounds = model
            .scores()
            .rounds()
            .iter()
            .enumerate()
            .map(|(round, scores)| RoundScoresSummary {
                round,
                players: model
                    .players()
                    .iter()
                    .map(|player| {
                        let fields = scores.get(&player.id).cloned().unwrap_or_default();
                        PlayerRoundScores {
                            player_id: player.id,
                            total: model.round_total(round, player.id),
                            fields,
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            game: model.selected_game().map(Into::into),
            players: model.players().iter().map(Into::into).collect(),
            first_player: model.first_player().map(Into::into),
            round_count: model.round_count(),
            rounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(player_count: usize, round_count: Option<usize>) -> StartSessionRequest {
        StartSessionRequest {
            game: Some("Wizard Duel".into()),
            player_count,
            round_count,
        }
    }

    #[test]
    fn start_request_counts_are_bounded() {
        assert!(request(1, None).validate().is_ok());
        assert!(request(MAX_PLAYERS, Some(MAX_ROUNDS)).validate().is_ok());

        assert!(request(0, None).validate().is_err());
        assert!(request(MAX_PLAYERS + 1, None).validate().is_err());
        assert!(request(2, Some(0)).validate().is_err());
        assert!(request(2, Some(usize::MAX)).validate().is_err());
    }
}
