use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::game::{GameDefinition, ScoringField};

/// Public projection of a game definition.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct GameDefinitionSummary {
    /// Unique game name.
    pub name: String,
    /// Whether sessions may span several rounds.
    pub supports_rounds: bool,
    /// Rounds used when a session does not choose.
    pub default_round_count: usize,
    /// Scored fields, in display order.
    pub scoring_fields: Vec<ScoringFieldSummary>,
}

/// One scored field of a game.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ScoringFieldSummary {
    /// Key used in score entries.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Input hint; may be empty.
    pub helper_text: String,
}

/// Games currently selectable, built-in first then user-defined.
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    /// Built-in games followed by custom ones.
    pub games: Vec<GameDefinitionSummary>,
}

/// Payload defining a user game from free-text field names.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomGameRequest {
    /// Name of the new game.
    pub name: String,
    /// Field labels; keys are derived by lowercasing and underscoring.
    pub field_names: Vec<String>,
}

impl From<&ScoringField> for ScoringFieldSummary {
    fn from(field: &ScoringField) -> Self {
        Self {
            key: field.key.clone(),
            label: field.label.clone(),
            helper_text: field.helper_text.clone(),
        }
    }
}

impl From<&GameDefinition> for GameDefinitionSummary {
    fn from(game: &GameDefinition) -> Self {
        Self {
            name: game.name.clone(),
            supports_rounds: game.supports_rounds,
            default_round_count: game.default_round_count,
            scoring_fields: game.scoring_fields.iter().map(Into::into).collect(),
        }
    }
}

impl From<&[GameDefinition]> for CatalogResponse {
    fn from(games: &[GameDefinition]) -> Self {
        Self {
            games: games.iter().map(Into::into).collect(),
        }
    }
}
