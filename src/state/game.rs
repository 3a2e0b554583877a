use uuid::Uuid;

use crate::dao::models::{GameDefinitionEntity, ScoringFieldEntity, ScoringFieldEntry};

/// Identifier handed out to players when a session starts.
pub type PlayerId = Uuid;

/// A named numeric category scored by a game (e.g. "Attack").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringField {
    /// Key used in the score matrix.
    pub key: String,
    /// Label shown to players.
    pub label: String,
    /// Short explanation of how the field is scored.
    pub helper_text: String,
}

impl ScoringField {
    /// Build a field whose key is derived from its label.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self {
            key: derive_field_key(label),
            label: label.to_string(),
            helper_text: String::new(),
        }
    }
}

/// Definition of a game selectable in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDefinition {
    /// Unique name across the catalog.
    pub name: String,
    /// Whether sessions may span several rounds.
    pub supports_rounds: bool,
    /// Rounds used when a session does not choose.
    pub default_round_count: usize,
    /// Scored fields, in display order.
    pub scoring_fields: Vec<ScoringField>,
}

impl GameDefinition {
    /// Matrix keys of every scoring field, in definition order.
    pub fn field_keys(&self) -> Vec<String> {
        self.scoring_fields
            .iter()
            .map(|field| field.key.clone())
            .collect()
    }

    /// Whether `key` names one of the game's scoring fields.
    pub fn has_field(&self, key: &str) -> bool {
        self.scoring_fields.iter().any(|field| field.key == key)
    }

    /// Number of rounds a session of this game should hold.
    ///
    /// Games without rounds always get a single one; otherwise the requested
    /// count wins over the default. Never below one.
    pub fn session_rounds(&self, requested: Option<usize>) -> usize {
        if !self.supports_rounds {
            return 1;
        }
        requested.unwrap_or(self.default_round_count).max(1)
    }
}

/// Player taking part in the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Stable id, unique within the session.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
}

impl Player {
    /// Create a player with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// A player's total, ranked among the other players.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    /// Ranked player.
    pub player: Player,
    /// Total the ranking is based on.
    pub total: f64,
}

/// Lowercase the label and join its words with underscores (`"Round A"` → `"round_a"`).
pub fn derive_field_key(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

impl From<ScoringFieldEntry> for ScoringField {
    fn from(value: ScoringFieldEntry) -> Self {
        match value {
            ScoringFieldEntry::Label(label) => ScoringField::from_label(&label),
            ScoringFieldEntry::Detailed(field) => {
                let key = if field.key.trim().is_empty() {
                    derive_field_key(&field.label)
                } else {
                    field.key
                };
                Self {
                    key,
                    label: field.label,
                    helper_text: field.helper_text,
                }
            }
        }
    }
}

impl From<ScoringField> for ScoringFieldEntry {
    fn from(value: ScoringField) -> Self {
        ScoringFieldEntry::Detailed(ScoringFieldEntity {
            key: value.key,
            label: value.label,
            helper_text: value.helper_text,
        })
    }
}

impl From<GameDefinitionEntity> for GameDefinition {
    fn from(value: GameDefinitionEntity) -> Self {
        Self {
            name: value.name,
            supports_rounds: value.supports_rounds,
            default_round_count: value.default_round_count,
            scoring_fields: value.scoring_fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<GameDefinition> for GameDefinitionEntity {
    fn from(value: GameDefinition) -> Self {
        Self {
            name: value.name,
            supports_rounds: value.supports_rounds,
            default_round_count: value.default_round_count,
            scoring_fields: value.scoring_fields.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounds_game(supports_rounds: bool, default_round_count: usize) -> GameDefinition {
        GameDefinition {
            name: "Test".into(),
            supports_rounds,
            default_round_count,
            scoring_fields: vec![ScoringField::from_label("Points")],
        }
    }

    #[test]
    fn field_keys_are_lowercased_and_underscored() {
        assert_eq!(derive_field_key("Round A"), "round_a");
        assert_eq!(derive_field_key("  Victory   Points "), "victory_points");
        assert_eq!(derive_field_key("Gold"), "gold");
    }

    #[test]
    fn session_rounds_follow_game_settings() {
        assert_eq!(rounds_game(false, 5).session_rounds(Some(3)), 1);
        assert_eq!(rounds_game(true, 4).session_rounds(None), 4);
        assert_eq!(rounds_game(true, 4).session_rounds(Some(2)), 2);
        assert_eq!(rounds_game(true, 0).session_rounds(None), 1);
    }

    #[test]
    fn detailed_entry_without_key_derives_it() {
        let field: ScoringField = ScoringFieldEntry::Detailed(ScoringFieldEntity {
            key: String::new(),
            label: "Magic Items".into(),
            helper_text: "One per item".into(),
        })
        .into();

        assert_eq!(field.key, "magic_items");
        assert_eq!(field.helper_text, "One per item");
    }
}
