use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    dto::{format_system_time, session::PlayerSummary},
    state::history::{HistoryPlayerScore, HistoryRecord, HistoryRound},
};

/// Query flag destructive history routes must carry.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConfirmQuery {
    /// Must be `true` for the deletion to happen.
    #[serde(default)]
    pub confirm: bool,
}

/// One player's saved scores for a round.
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryPlayerScoreSummary {
    /// Player id.
    pub id: Uuid,
    /// Player name at save time.
    pub name: String,
    /// Field key to value.
    pub fields: IndexMap<String, f64>,
    /// Round total.
    pub total: f64,
}

/// Saved scores of one round.
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryRoundSummary {
    /// 1-based.
    pub round_number: usize,
    /// Scores in roster order.
    pub players: Vec<HistoryPlayerScoreSummary>,
}

/// Saved session as exposed by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryRecordSummary {
    /// Record id, used for deletion.
    pub id: Uuid,
    /// RFC 3339 timestamp of the save.
    pub timestamp: String,
    /// Name of the game played.
    pub game_name: String,
    /// Rounds in the session.
    pub round_count: usize,
    /// Scores per round.
    pub per_round: Vec<HistoryRoundSummary>,
    /// Roster at save time.
    pub players: Vec<PlayerSummary>,
}

/// Saved sessions, most recent first.
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    /// Most recent first.
    pub records: Vec<HistoryRecordSummary>,
}

/// Outcome of a history deletion.
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryDeletionResponse {
    /// Records removed; 0 for an unknown id.
    pub removed: usize,
}

impl From<&HistoryPlayerScore> for HistoryPlayerScoreSummary {
    fn from(score: &HistoryPlayerScore) -> Self {
        Self {
            id: score.id,
            name: score.name.clone(),
            fields: score.fields.clone(),
            total: score.total,
        }
    }
}

impl From<&HistoryRound> for HistoryRoundSummary {
    fn from(round: &HistoryRound) -> Self {
        Self {
            round_number: round.round_number,
            players: round.players.iter().map(Into::into).collect(),
        }
    }
}

impl From<&HistoryRecord> for HistoryRecordSummary {
    fn from(record: &HistoryRecord) -> Self {
        Self {
            id: record.id,
            timestamp: format_system_time(record.timestamp),
            game_name: record.game_name.clone(),
            round_count: record.round_count,
            per_round: record.per_round.iter().map(Into::into).collect(),
            players: record.players.iter().map(Into::into).collect(),
        }
    }
}

impl From<&[HistoryRecord]> for HistoryResponse {
    fn from(records: &[HistoryRecord]) -> Self {
        Self {
            records: records.iter().map(Into::into).collect(),
        }
    }
}
