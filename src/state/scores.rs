use indexmap::IndexMap;
use serde_json::Value;

use crate::state::game::{Player, PlayerId};

/// Field key → value for one player in one round.
pub type FieldScores = IndexMap<String, f64>;
/// Player → field scores for one round, in roster order.
pub type RoundScores = IndexMap<PlayerId, FieldScores>;

/// Per-round score grid of the current session.
///
/// Every round holds every player, and every player holds every field key;
/// cells start at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMatrix {
    rounds: Vec<RoundScores>,
}

impl ScoreMatrix {
    /// Build a zeroed grid of `round_count` rounds × `players` × `field_keys`.
    pub fn new(round_count: usize, players: &[Player], field_keys: &[String]) -> Self {
        let empty_round: RoundScores = players
            .iter()
            .map(|player| {
                let fields = field_keys.iter().map(|key| (key.clone(), 0.0)).collect();
                (player.id, fields)
            })
            .collect();

        Self {
            rounds: vec![empty_round; round_count],
        }
    }

    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Rounds, first round first.
    pub fn rounds(&self) -> &[RoundScores] {
        &self.rounds
    }

    /// Value stored in a cell, if the cell exists.
    pub fn get(&self, round: usize, player: PlayerId, key: &str) -> Option<f64> {
        self.rounds.get(round)?.get(&player)?.get(key).copied()
    }

    /// Overwrite an existing cell. Returns `false` when the cell does not exist.
    pub fn set(&mut self, round: usize, player: PlayerId, key: &str, value: f64) -> bool {
        let Some(cell) = self
            .rounds
            .get_mut(round)
            .and_then(|scores| scores.get_mut(&player))
            .and_then(|fields| fields.get_mut(key))
        else {
            return false;
        };

        *cell = sanitize_score(value);
        true
    }

    /// Sum of a player's field values for one round; 0 for unknown rounds or players.
    pub fn round_total(&self, round: usize, player: PlayerId) -> f64 {
        self.rounds
            .get(round)
            .and_then(|scores| scores.get(&player))
            .map(|fields| fields.values().sum())
            .unwrap_or(0.0)
    }

    /// Sum of a player's round totals across the whole grid.
    pub fn overall_total(&self, player: PlayerId) -> f64 {
        (0..self.rounds.len())
            .map(|round| self.round_total(round, player))
            .sum()
    }
}

/// Convert raw score input into a number; anything non-numeric becomes 0.
pub fn coerce_score(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.map(sanitize_score).unwrap_or(0.0)
}

fn sanitize_score(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn players(count: usize) -> Vec<Player> {
        (1..=count)
            .map(|index| Player::new(format!("Player {index}")))
            .collect()
    }

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|key| key.to_string()).collect()
    }

    #[test]
    fn new_matrix_is_zeroed_for_every_cell() {
        let roster = players(3);
        let matrix = ScoreMatrix::new(2, &roster, &keys(&["attack", "defense"]));

        assert_eq!(matrix.round_count(), 2);
        for round in 0..2 {
            for player in &roster {
                assert_eq!(matrix.get(round, player.id, "attack"), Some(0.0));
                assert_eq!(matrix.get(round, player.id, "defense"), Some(0.0));
                assert_eq!(matrix.round_total(round, player.id), 0.0);
            }
        }
    }

    #[test]
    fn totals_sum_fields_and_rounds() {
        let roster = players(2);
        let mut matrix = ScoreMatrix::new(2, &roster, &keys(&["a", "b"]));
        let p1 = roster[0].id;

        assert!(matrix.set(0, p1, "a", 3.0));
        assert!(matrix.set(0, p1, "b", 2.5));
        assert!(matrix.set(1, p1, "a", -1.0));

        assert_eq!(matrix.round_total(0, p1), 5.5);
        assert_eq!(matrix.round_total(1, p1), -1.0);
        assert_eq!(matrix.overall_total(p1), 4.5);
        assert_eq!(matrix.overall_total(roster[1].id), 0.0);
    }

    #[test]
    fn set_rejects_missing_cells() {
        let roster = players(1);
        let mut matrix = ScoreMatrix::new(1, &roster, &keys(&["a"]));

        assert!(!matrix.set(1, roster[0].id, "a", 1.0));
        assert!(!matrix.set(0, PlayerId::new_v4(), "a", 1.0));
        assert!(!matrix.set(0, roster[0].id, "missing", 1.0));
        assert_eq!(matrix.round_total(0, roster[0].id), 0.0);
    }

    #[test]
    fn duplicate_field_keys_share_one_cell() {
        let roster = players(1);
        let mut matrix = ScoreMatrix::new(1, &roster, &keys(&["round", "round"]));

        matrix.set(0, roster[0].id, "round", 4.0);
        assert_eq!(matrix.round_total(0, roster[0].id), 4.0);
    }

    #[test]
    fn coercion_turns_non_numeric_input_into_zero() {
        assert_eq!(coerce_score(&json!(7)), 7.0);
        assert_eq!(coerce_score(&json!(2.5)), 2.5);
        assert_eq!(coerce_score(&json!(" 12 ")), 12.0);
        assert_eq!(coerce_score(&json!("twelve")), 0.0);
        assert_eq!(coerce_score(&json!("")), 0.0);
        assert_eq!(coerce_score(&json!("NaN")), 0.0);
        assert_eq!(coerce_score(&json!(null)), 0.0);
        assert_eq!(coerce_score(&json!(true)), 0.0);
        assert_eq!(coerce_score(&json!([1])), 0.0);
    }
}
