use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Game definition as stored in the catalog document and the `customGames` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameDefinitionEntity {
    /// Display name, also used to select the game.
    pub name: String,
    /// Whether the game is played over several rounds.
    #[serde(default)]
    pub supports_rounds: bool,
    /// Number of rounds a session starts with when none is requested.
    #[serde(default = "default_round_count")]
    pub default_round_count: usize,
    /// Ordered scoring categories.
    #[serde(default)]
    pub scoring_fields: Vec<ScoringFieldEntry>,
}

/// A scoring field entry. Older catalog documents list bare labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ScoringFieldEntry {
    /// Field with label and hint.
    Detailed(ScoringFieldEntity),
    /// Bare label; the hint is empty.
    Label(String),
}

/// Fully described scoring field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringFieldEntity {
    /// Matrix key; derived from the label when left empty.
    #[serde(default)]
    pub key: String,
    /// Label shown next to the input.
    pub label: String,
    /// Hint shown under the input.
    #[serde(default)]
    pub helper_text: String,
}

/// Immutable snapshot of a finished session, persisted under the `history` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecordEntity {
    /// Record id.
    pub id: Uuid,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Name of the game played.
    pub game_name: String,
    /// Rounds in the session.
    pub round_count: usize,
    /// Scores per round, first round first.
    pub per_round: Vec<HistoryRoundEntity>,
    /// Roster in seating order.
    pub players: Vec<PlayerSummaryEntity>,
}

/// Scores of every player for one round of a history record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRoundEntity {
    /// 1-based round number.
    pub round_number: usize,
    /// Scores in roster order.
    pub players: Vec<HistoryPlayerScoreEntity>,
}

/// One player's field values and total within a history round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryPlayerScoreEntity {
    /// Player id.
    pub id: Uuid,
    /// Player name at save time.
    pub name: String,
    /// Field key to value.
    pub fields: IndexMap<String, f64>,
    /// Sum of the field values.
    pub total: f64,
}

/// Player identity captured in a history record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSummaryEntity {
    /// Player id.
    pub id: Uuid,
    /// Player name at save time.
    pub name: String,
}

fn default_round_count() -> usize {
    1
}
