use std::time::{Duration, SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::{
    dao::models::{
        HistoryPlayerScoreEntity, HistoryRecordEntity, HistoryRoundEntity, PlayerSummaryEntity,
    },
    state::{
        game::{Player, PlayerId},
        scores::FieldScores,
    },
};

/// Immutable snapshot of a scoring session, most recent first in the history list.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    /// Record id.
    pub id: Uuid,
    /// Save time, millisecond precision.
    pub timestamp: SystemTime,
    /// Name of the game played.
    pub game_name: String,
    /// Rounds in the session.
    pub round_count: usize,
    /// Scores per round, first round first.
    pub per_round: Vec<HistoryRound>,
    /// Roster at save time.
    pub players: Vec<Player>,
}

/// Scores of one round inside a [`HistoryRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRound {
    /// 1-based.
    pub round_number: usize,
    /// Scores in roster order.
    pub players: Vec<HistoryPlayerScore>,
}

/// A player's field values and total for one recorded round.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPlayerScore {
    /// Player id.
    pub id: PlayerId,
    /// Player name at save time.
    pub name: String,
    /// Field key to value.
    pub fields: FieldScores,
    /// Round total.
    pub total: f64,
}

impl HistoryRecord {
    /// Sum of a player's totals across every recorded round.
    pub fn overall_total(&self, player: PlayerId) -> f64 {
        self.per_round
            .iter()
            .flat_map(|round| round.players.iter())
            .filter(|score| score.id == player)
            .map(|score| score.total)
            .sum()
    }
}

fn to_millis(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

fn from_millis(millis: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_millis(millis)
}

impl From<HistoryPlayerScoreEntity> for HistoryPlayerScore {
    fn from(value: HistoryPlayerScoreEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            fields: value.fields,
            total: value.total,
        }
    }
}

impl From<HistoryPlayerScore> for HistoryPlayerScoreEntity {
    fn from(value: HistoryPlayerScore) -> Self {
        Self {
            id: value.id,
            name: value.name,
            fields: value.fields,
            total: value.total,
        }
    }
}

impl From<HistoryRoundEntity> for HistoryRound {
    fn from(value: HistoryRoundEntity) -> Self {
        Self {
            round_number: value.round_number,
            players: value.players.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<HistoryRound> for HistoryRoundEntity {
    fn from(value: HistoryRound) -> Self {
        Self {
            round_number: value.round_number,
            players: value.players.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PlayerSummaryEntity> for Player {
    fn from(value: PlayerSummaryEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

impl From<Player> for PlayerSummaryEntity {
    fn from(value: Player) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

impl From<HistoryRecordEntity> for HistoryRecord {
    fn from(value: HistoryRecordEntity) -> Self {
        Self {
            id: value.id,
            timestamp: from_millis(value.timestamp),
            game_name: value.game_name,
            round_count: value.round_count,
            per_round: value.per_round.into_iter().map(Into::into).collect(),
            players: value.players.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<HistoryRecord> for HistoryRecordEntity {
    fn from(value: HistoryRecord) -> Self {
        Self {
            id: value.id,
            timestamp: to_millis(value.timestamp),
            game_name: value.game_name,
            round_count: value.round_count,
            per_round: value.per_round.into_iter().map(Into::into).collect(),
            players: value.players.into_iter().map(Into::into).collect(),
        }
    }
}
