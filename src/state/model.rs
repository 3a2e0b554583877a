//! Round-based score aggregation and history recording.
//!
//! [`ScoreModel`] owns the catalog, the roster, the score matrix and the saved
//! history. Every operation is synchronous; durable writes go through the
//! injected [`KeyValueStore`] and are fire-and-forget.

use std::{
    collections::HashSet,
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    dao::{
        catalog::CatalogError,
        kv_store::{CUSTOM_GAMES_KEY, HISTORY_KEY, KeyValueStore},
        models::{GameDefinitionEntity, HistoryRecordEntity},
    },
    state::{
        game::{GameDefinition, Player, PlayerId, ScoringField, Standing},
        history::{HistoryPlayerScore, HistoryRecord, HistoryRound},
        random::RandomSource,
        scores::ScoreMatrix,
    },
};

/// Largest roster a session accepts.
pub const MAX_PLAYERS: usize = 8;
/// Largest number of rounds a session accepts.
pub const MAX_ROUNDS: usize = 50;

/// Failures signalled by [`ScoreModel`] operations. None of them leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// No game was given to start a session with.
    #[error("select a game before starting a session")]
    MissingGame,
    /// Player count outside `1..=MAX_PLAYERS`.
    #[error("a session needs between 1 and {max} players (got {0})", max = MAX_PLAYERS)]
    InvalidPlayerCount(usize),
    /// Resolved round count above [`MAX_ROUNDS`].
    #[error("a session allows at most {max} rounds (got {0})", max = MAX_ROUNDS)]
    TooManyRounds(usize),
    /// Custom game name is blank.
    #[error("custom game name must not be empty")]
    EmptyGameName,
    /// Custom game has no usable field name.
    #[error("custom game needs at least one non-empty field name")]
    NoScoringFields,
    /// Score entry before any session started.
    #[error("no session in progress")]
    NoSession,
    /// Player id not in the roster.
    #[error("player `{0}` is not part of the session")]
    UnknownPlayer(PlayerId),
    /// Round index past the session's last round.
    #[error("round {round} does not exist (session has {rounds} round(s))")]
    RoundOutOfRange {
        /// Requested 0-based round.
        round: usize,
        /// Rounds in the session.
        rounds: usize,
    },
    /// Field key not scored by the selected game.
    #[error("field `{0}` is not scored by the selected game")]
    UnknownField(String),
}

/// Score-tracking state for one browsing session.
pub struct ScoreModel {
    store: Arc<dyn KeyValueStore>,
    random: Box<dyn RandomSource>,
    games: Vec<GameDefinition>,
    custom_games: Vec<GameDefinition>,
    selected_game: Option<GameDefinition>,
    players: Vec<Player>,
    scores: ScoreMatrix,
    first_player: Option<PlayerId>,
    history: Vec<HistoryRecord>,
}

impl ScoreModel {
    /// Build a model over `store`, reading saved history and custom games.
    ///
    /// The game list stays empty until [`ScoreModel::load_catalog`] runs.
    pub fn new(store: Arc<dyn KeyValueStore>, random: Box<dyn RandomSource>) -> Self {
        let custom_games = read_document::<Vec<GameDefinitionEntity>>(store.as_ref(), CUSTOM_GAMES_KEY)
            .into_iter()
            .map(GameDefinition::from)
            .collect::<Vec<_>>();
        let history = read_document::<Vec<HistoryRecordEntity>>(store.as_ref(), HISTORY_KEY)
            .into_iter()
            .map(HistoryRecord::from)
            .collect::<Vec<_>>();

        debug!(
            custom_games = custom_games.len(),
            history = history.len(),
            "score model restored from storage"
        );

        Self {
            store,
            random,
            games: Vec::new(),
            custom_games,
            selected_game: None,
            players: Vec::new(),
            scores: ScoreMatrix::default(),
            first_player: None,
            history,
        }
    }

    /// Merge the fetched built-in catalog with the user-defined games.
    ///
    /// A failed fetch is not fatal: the list then only holds custom games.
    pub fn load_catalog(
        &mut self,
        builtin: Result<Vec<GameDefinition>, CatalogError>,
    ) -> &[GameDefinition] {
        let builtin = match builtin {
            Ok(games) => games,
            Err(err) => {
                warn!(error = %err, "failed to load game catalog; using custom games only");
                Vec::new()
            }
        };

        self.games = builtin
            .into_iter()
            .chain(self.custom_games.iter().cloned())
            .collect();
        info!(
            games = self.games.len(),
            custom = self.custom_games.len(),
            "game catalog loaded"
        );
        &self.games
    }

    /// Built-in games followed by custom games.
    pub fn games(&self) -> &[GameDefinition] {
        &self.games
    }

    /// User-defined games, in creation order.
    pub fn custom_games(&self) -> &[GameDefinition] {
        &self.custom_games
    }

    /// Look up a game of the loaded catalog by its exact name.
    pub fn find_game(&self, name: &str) -> Option<&GameDefinition> {
        self.games.iter().find(|game| game.name == name)
    }

    /// Start a fresh session, replacing roster and score matrix.
    ///
    /// Players are named `Player 1`..`Player N` and a first player is drawn.
    pub fn start_session(
        &mut self,
        game: Option<GameDefinition>,
        player_count: usize,
        round_count: Option<usize>,
    ) -> Result<(), ModelError> {
        let game = game.ok_or(ModelError::MissingGame)?;
        if !(1..=MAX_PLAYERS).contains(&player_count) {
            return Err(ModelError::InvalidPlayerCount(player_count));
        }
        let rounds = game.session_rounds(round_count);
        if rounds > MAX_ROUNDS {
            return Err(ModelError::TooManyRounds(rounds));
        }

        let players = (1..=player_count)
            .map(|index| Player::new(format!("Player {index}")))
            .collect::<Vec<_>>();

        self.scores = ScoreMatrix::new(rounds, &players, &game.field_keys());
        self.players = players;
        info!(
            game = %game.name,
            players = player_count,
            rounds,
            "session started"
        );
        self.selected_game = Some(game);
        self.reroll_first_player();
        Ok(())
    }

    /// Draw a new first player uniformly from the roster. No-op without players.
    pub fn reroll_first_player(&mut self) -> Option<&Player> {
        if self.players.is_empty() {
            return None;
        }

        let index = self.random.pick_index(self.players.len());
        let player = &self.players[index];
        self.first_player = Some(player.id);
        Some(player)
    }

    /// Player drawn to start.
    pub fn first_player(&self) -> Option<&Player> {
        let id = self.first_player?;
        self.player(id)
    }

    /// Game of the running session.
    pub fn selected_game(&self) -> Option<&GameDefinition> {
        self.selected_game.as_ref()
    }

    /// Roster in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a roster entry.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Score grid of the running session.
    pub fn scores(&self) -> &ScoreMatrix {
        &self.scores
    }

    /// Rounds in the running session; 0 before the first one.
    pub fn round_count(&self) -> usize {
        self.scores.round_count()
    }

    /// Rename a player in place. Names need not be unique.
    pub fn rename_player(
        &mut self,
        id: PlayerId,
        name: impl Into<String>,
    ) -> Result<&Player, ModelError> {
        let player = self
            .players
            .iter_mut()
            .find(|player| player.id == id)
            .ok_or(ModelError::UnknownPlayer(id))?;
        player.name = name.into();
        Ok(player)
    }

    /// Record a field value. Non-finite values are stored as 0.
    pub fn set_score(
        &mut self,
        round: usize,
        player: PlayerId,
        field_key: &str,
        value: f64,
    ) -> Result<f64, ModelError> {
        let game = self.selected_game.as_ref().ok_or(ModelError::NoSession)?;
        let rounds = self.scores.round_count();
        if round >= rounds {
            return Err(ModelError::RoundOutOfRange { round, rounds });
        }
        if self.player(player).is_none() {
            return Err(ModelError::UnknownPlayer(player));
        }
        if !game.has_field(field_key) {
            return Err(ModelError::UnknownField(field_key.to_string()));
        }

        self.scores.set(round, player, field_key, value);
        Ok(self.scores.get(round, player, field_key).unwrap_or(0.0))
    }

    /// Sum of a player's field values in one round.
    pub fn round_total(&self, round: usize, player: PlayerId) -> f64 {
        self.scores.round_total(round, player)
    }

    /// Sum of a player's round totals over the whole session.
    pub fn overall_total(&self, player: PlayerId) -> f64 {
        self.scores.overall_total(player)
    }

    /// Players ranked by their total in `round`, highest first; ties keep roster order.
    pub fn standings_for_round(&self, round: usize) -> Vec<Standing> {
        self.rank(|player| self.round_total(round, player))
    }

    /// Players ranked by their overall total, highest first; ties keep roster order.
    pub fn overall_standings(&self) -> Vec<Standing> {
        self.rank(|player| self.overall_total(player))
    }

    fn rank(&self, total: impl Fn(PlayerId) -> f64) -> Vec<Standing> {
        let mut standings = self
            .players
            .iter()
            .map(|player| Standing {
                player: player.clone(),
                total: total(player.id),
            })
            .collect::<Vec<_>>();
        // `sort_by` is stable, which keeps roster order between equal totals.
        standings.sort_by(|a, b| b.total.total_cmp(&a.total));
        standings
    }

    /// Saved sessions, most recent first.
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// Snapshot the session into a new history record and persist the history list.
    ///
    /// Returns `None` when no game is selected.
    pub fn commit_to_history(&mut self) -> Option<HistoryRecord> {
        let game = self.selected_game.as_ref()?;

        let per_round = self
            .scores
            .rounds()
            .iter()
            .enumerate()
            .map(|(index, round)| HistoryRound {
                round_number: index + 1,
                players: self
                    .players
                    .iter()
                    .map(|player| {
                        let fields = round.get(&player.id).cloned().unwrap_or_default();
                        let total = fields.values().sum();
                        HistoryPlayerScore {
                            id: player.id,
                            name: player.name.clone(),
                            fields,
                            total,
                        }
                    })
                    .collect(),
            })
            .collect();

        let record = HistoryRecord {
            id: Uuid::new_v4(),
            timestamp: now_millis_precision(),
            game_name: game.name.clone(),
            round_count: self.scores.round_count(),
            per_round,
            players: self.players.clone(),
        };

        self.history.insert(0, record.clone());
        self.persist_history();
        info!(id = %record.id, game = %record.game_name, "session saved to history");
        Some(record)
    }

    /// Remove one history record. Returns whether a record was removed.
    pub fn delete_history_entry(&mut self, id: Uuid) -> bool {
        let before = self.history.len();
        self.history.retain(|record| record.id != id);
        let removed = self.history.len() != before;
        if removed {
            self.persist_history();
            info!(%id, "history record deleted");
        }
        removed
    }

    /// Remove every history record, returning how many were dropped.
    pub fn clear_history(&mut self) -> usize {
        let removed = self.history.len();
        self.history.clear();
        self.persist_history();
        info!(removed, "history cleared");
        removed
    }

    /// Define a new game from free-text field names and persist it.
    ///
    /// Blank field names are skipped. Field keys are not deduplicated; two
    /// names deriving the same key end up sharing one matrix cell.
    pub fn add_custom_game<S: AsRef<str>>(
        &mut self,
        name: &str,
        field_names: &[S],
    ) -> Result<GameDefinition, ModelError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ModelError::EmptyGameName);
        }

        let scoring_fields = field_names
            .iter()
            .map(AsRef::as_ref)
            .filter(|label| !label.trim().is_empty())
            .map(ScoringField::from_label)
            .collect::<Vec<_>>();
        if scoring_fields.is_empty() {
            return Err(ModelError::NoScoringFields);
        }

        let mut seen = HashSet::new();
        for field in &scoring_fields {
            if !seen.insert(field.key.as_str()) {
                warn!(game = name, key = %field.key, "custom game fields share a key");
            }
        }

        let game = GameDefinition {
            name: name.to_string(),
            supports_rounds: true,
            default_round_count: 1,
            scoring_fields,
        };

        self.custom_games.push(game.clone());
        self.games.push(game.clone());
        self.persist(
            CUSTOM_GAMES_KEY,
            &self
                .custom_games
                .iter()
                .cloned()
                .map(GameDefinitionEntity::from)
                .collect::<Vec<_>>(),
        );
        info!(game = %game.name, fields = game.scoring_fields.len(), "custom game added");
        Ok(game)
    }

    fn persist_history(&self) {
        let records = self
            .history
            .iter()
            .cloned()
            .map(HistoryRecordEntity::from)
            .collect::<Vec<_>>();
        self.persist(HISTORY_KEY, &records);
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        let document = match serde_json::to_string(value) {
            Ok(document) => document,
            Err(err) => {
                warn!(key, error = %err, "failed to encode document; not persisted");
                return;
            }
        };

        if let Err(err) = self.store.set(key, document) {
            warn!(key, error = %err, "failed to persist document");
        }
    }
}

fn read_document<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    match store.get(key) {
        Ok(Some(contents)) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            warn!(key, error = %err, "stored document is malformed; starting empty");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(err) => {
            warn!(key, error = %err, "failed to read stored document; starting empty");
            T::default()
        }
    }
}

/// Current time truncated to the millisecond precision used in storage.
fn now_millis_precision() -> SystemTime {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);
    UNIX_EPOCH + Duration::from_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dao::{kv_store::MemoryKeyValueStore, storage::StorageResult},
        state::random::SequenceRandom,
    };

    fn duel() -> GameDefinition {
        GameDefinition {
            name: "Duel".into(),
            supports_rounds: false,
            default_round_count: 1,
            scoring_fields: vec![
                ScoringField::from_label("Attack"),
                ScoringField::from_label("Defense"),
            ],
        }
    }

    fn campaign(rounds: usize) -> GameDefinition {
        GameDefinition {
            name: "Campaign".into(),
            supports_rounds: true,
            default_round_count: rounds,
            scoring_fields: vec![ScoringField::from_label("Gold")],
        }
    }

    fn model_with(store: Arc<dyn KeyValueStore>, picks: &[usize]) -> ScoreModel {
        ScoreModel::new(store, Box::new(SequenceRandom::new(picks.to_vec())))
    }

    fn model() -> ScoreModel {
        model_with(Arc::new(MemoryKeyValueStore::new()), &[])
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Err(crate::dao::storage::StorageError::InvalidKey { key: key.into() })
        }

        fn set(&self, key: &str, _value: String) -> StorageResult<()> {
            Err(crate::dao::storage::StorageError::InvalidKey { key: key.into() })
        }

        fn health_check(&self) -> StorageResult<()> {
            Ok(())
        }
    }

    #[test]
    fn start_session_creates_unique_players_and_zeroed_matrix() {
        for count in 1..=8 {
            let mut model = model();
            model.start_session(Some(campaign(3)), count, None).unwrap();

            let ids = model.players().iter().map(|p| p.id).collect::<HashSet<_>>();
            assert_eq!(model.players().len(), count);
            assert_eq!(ids.len(), count);
            assert_eq!(model.players()[0].name, "Player 1");
            assert_eq!(model.round_count(), 3);
            for round in 0..3 {
                for player in model.players() {
                    assert_eq!(model.round_total(round, player.id), 0.0);
                }
            }
        }
    }

    #[test]
    fn start_session_requires_game_and_players() {
        let mut model = model();
        assert_eq!(
            model.start_session(None, 2, None),
            Err(ModelError::MissingGame)
        );
        assert_eq!(
            model.start_session(Some(duel()), 0, None),
            Err(ModelError::InvalidPlayerCount(0))
        );
        assert!(model.players().is_empty());
        assert!(model.selected_game().is_none());
    }

    #[test]
    fn oversized_sessions_are_rejected() {
        let mut model = model();
        assert_eq!(
            model.start_session(Some(duel()), MAX_PLAYERS + 1, None),
            Err(ModelError::InvalidPlayerCount(MAX_PLAYERS + 1))
        );
        assert_eq!(
            model.start_session(Some(campaign(3)), 1, Some(usize::MAX)),
            Err(ModelError::TooManyRounds(usize::MAX))
        );
        assert_eq!(
            model.start_session(Some(campaign(MAX_ROUNDS + 1)), 2, None),
            Err(ModelError::TooManyRounds(MAX_ROUNDS + 1))
        );
        assert!(model.players().is_empty());

        model
            .start_session(Some(campaign(3)), MAX_PLAYERS, Some(MAX_ROUNDS))
            .unwrap();
        assert_eq!(model.round_count(), MAX_ROUNDS);
    }

    #[test]
    fn failed_start_keeps_previous_session() {
        let mut model = model();
        model.start_session(Some(duel()), 2, None).unwrap();
        let roster = model.players().to_vec();

        assert!(model.start_session(None, 4, None).is_err());
        assert_eq!(model.players(), roster.as_slice());
    }

    #[test]
    fn first_player_follows_random_source() {
        let mut model = model_with(Arc::new(MemoryKeyValueStore::new()), &[2, 0]);
        model.start_session(Some(duel()), 3, None).unwrap();
        assert_eq!(model.first_player().unwrap().name, "Player 3");

        let rerolled = model.reroll_first_player().unwrap().name.clone();
        assert_eq!(rerolled, "Player 1");
    }

    #[test]
    fn reroll_without_players_is_noop() {
        let mut model = model();
        assert!(model.reroll_first_player().is_none());
        assert!(model.first_player().is_none());
    }

    #[test]
    fn round_standings_match_reference_example() {
        let mut model = model();
        model.start_session(Some(duel()), 2, Some(1)).unwrap();
        let p1 = model.players()[0].id;
        let p2 = model.players()[1].id;

        model.set_score(0, p1, "attack", 3.0).unwrap();
        model.set_score(0, p1, "defense", 2.0).unwrap();
        model.set_score(0, p2, "attack", 1.0).unwrap();
        model.set_score(0, p2, "defense", 1.0).unwrap();

        let standings = model.standings_for_round(0);
        assert_eq!(standings[0].player.id, p1);
        assert_eq!(standings[0].total, 5.0);
        assert_eq!(standings[1].player.id, p2);
        assert_eq!(standings[1].total, 2.0);
    }

    #[test]
    fn overall_total_sums_round_totals() {
        let mut model = model();
        model.start_session(Some(campaign(3)), 2, None).unwrap();
        let p1 = model.players()[0].id;

        model.set_score(0, p1, "gold", 4.0).unwrap();
        model.set_score(1, p1, "gold", 6.0).unwrap();
        model.set_score(2, p1, "gold", -2.0).unwrap();

        let by_round: f64 = (0..3).map(|round| model.round_total(round, p1)).sum();
        assert_eq!(model.overall_total(p1), by_round);
        assert_eq!(model.overall_total(p1), 8.0);
    }

    #[test]
    fn standings_are_stable_for_ties() {
        let mut model = model();
        model.start_session(Some(campaign(1)), 4, None).unwrap();
        let ids = model.players().iter().map(|p| p.id).collect::<Vec<_>>();

        model.set_score(0, ids[2], "gold", 5.0).unwrap();
        let order = model
            .overall_standings()
            .into_iter()
            .map(|standing| standing.player.id)
            .collect::<Vec<_>>();

        assert_eq!(order, vec![ids[2], ids[0], ids[1], ids[3]]);
    }

    #[test]
    fn set_score_validates_coordinates() {
        let mut model = model();
        assert_eq!(
            model.set_score(0, Uuid::new_v4(), "gold", 1.0),
            Err(ModelError::NoSession)
        );

        model.start_session(Some(campaign(2)), 1, None).unwrap();
        let p1 = model.players()[0].id;
        let stranger = Uuid::new_v4();

        assert_eq!(
            model.set_score(2, p1, "gold", 1.0),
            Err(ModelError::RoundOutOfRange { round: 2, rounds: 2 })
        );
        assert_eq!(
            model.set_score(0, stranger, "gold", 1.0),
            Err(ModelError::UnknownPlayer(stranger))
        );
        assert_eq!(
            model.set_score(0, p1, "silver", 1.0),
            Err(ModelError::UnknownField("silver".into()))
        );
        assert_eq!(model.set_score(0, p1, "gold", f64::NAN), Ok(0.0));
    }

    #[test]
    fn rename_player_keeps_identity() {
        let mut model = model();
        model.start_session(Some(duel()), 2, None).unwrap();
        let p2 = model.players()[1].id;

        model.rename_player(p2, "Morgana").unwrap();
        model.rename_player(model.players()[0].id, "Morgana").unwrap();

        assert_eq!(model.player(p2).unwrap().name, "Morgana");
        assert_eq!(model.players()[0].name, "Morgana");
        assert!(matches!(
            model.rename_player(Uuid::new_v4(), "Nobody"),
            Err(ModelError::UnknownPlayer(_))
        ));
    }

    #[test]
    fn commit_requires_selected_game() {
        let mut model = model();
        assert!(model.commit_to_history().is_none());
        assert!(model.history().is_empty());
    }

    #[test]
    fn committed_history_survives_reload() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
        let mut model = model_with(store.clone(), &[]);
        model.start_session(Some(campaign(2)), 2, None).unwrap();
        let p1 = model.players()[0].id;
        model.rename_player(p1, "Ada").unwrap();
        model.set_score(0, p1, "gold", 3.0).unwrap();
        model.set_score(1, p1, "gold", 4.0).unwrap();

        let record = model.commit_to_history().unwrap();
        assert_eq!(record.round_count, 2);
        assert_eq!(record.per_round[1].round_number, 2);
        assert_eq!(record.overall_total(p1), 7.0);

        let reloaded = model_with(store, &[]);
        assert_eq!(reloaded.history(), &[record]);
    }

    #[test]
    fn history_is_most_recent_first() {
        let mut model = model();
        model.start_session(Some(duel()), 1, None).unwrap();
        let first = model.commit_to_history().unwrap();
        let second = model.commit_to_history().unwrap();

        let ids = model.history().iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn delete_history_entry_removes_exactly_one() {
        let mut model = model();
        model.start_session(Some(duel()), 1, None).unwrap();
        let ids = (0..3)
            .map(|_| model.commit_to_history().unwrap().id)
            .collect::<Vec<_>>();

        assert!(!model.delete_history_entry(Uuid::new_v4()));
        assert_eq!(model.history().len(), 3);

        assert!(model.delete_history_entry(ids[1]));
        let remaining = model.history().iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(remaining, vec![ids[2], ids[0]]);
    }

    #[test]
    fn clear_history_persists_empty_list() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
        let mut model = model_with(store.clone(), &[]);
        model.start_session(Some(duel()), 1, None).unwrap();
        model.commit_to_history();
        model.commit_to_history();

        assert_eq!(model.clear_history(), 2);
        assert_eq!(store.get(HISTORY_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn add_custom_game_derives_keys_and_persists() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
        let mut model = model_with(store.clone(), &[]);

        let game = model
            .add_custom_game("My Quiz", &["Round A", "Round B"])
            .unwrap();
        assert_eq!(game.field_keys(), vec!["round_a", "round_b"]);
        assert_eq!(game.scoring_fields[0].label, "Round A");

        let reloaded = model_with(store, &[]);
        assert_eq!(reloaded.custom_games(), &[game]);
    }

    #[test]
    fn add_custom_game_rejects_blank_input() {
        let mut model = model();
        assert_eq!(
            model.add_custom_game("  ", &["Points"]),
            Err(ModelError::EmptyGameName)
        );
        assert_eq!(
            model.add_custom_game("Quiz", &["", "   "]),
            Err(ModelError::NoScoringFields)
        );
        assert!(model.custom_games().is_empty());
        assert!(model.games().is_empty());
    }

    #[test]
    fn custom_game_skips_blank_fields() {
        let mut model = model();
        let game = model
            .add_custom_game("Quiz", &["Music", " ", "Sport"])
            .unwrap();
        assert_eq!(game.field_keys(), vec!["music", "sport"]);
    }

    #[test]
    fn load_catalog_merges_builtin_and_custom() {
        let mut model = model();
        model.add_custom_game("Quiz", &["Points"]).unwrap();

        let games = model.load_catalog(Ok(vec![duel(), campaign(2)]));
        let names = games.iter().map(|g| g.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Duel", "Campaign", "Quiz"]);
        assert!(model.find_game("Campaign").is_some());
    }

    #[test]
    fn load_catalog_falls_back_to_custom_games() {
        let mut model = model();
        model.add_custom_game("Quiz", &["Points"]).unwrap();

        let failure = CatalogError::RemoteDisabled {
            url: "http://localhost/games.json".into(),
        };
        let games = model.load_catalog(Err(failure));
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].name, "Quiz");
    }

    #[test]
    fn storage_failures_do_not_fail_operations() {
        let mut model = model_with(Arc::new(FailingStore), &[]);
        model.start_session(Some(duel()), 2, None).unwrap();

        assert!(model.commit_to_history().is_some());
        assert_eq!(model.history().len(), 1);
        assert!(model.add_custom_game("Quiz", &["Points"]).is_ok());
    }

    #[test]
    fn malformed_stored_documents_start_empty() {
        let store = MemoryKeyValueStore::new()
            .with_entry(HISTORY_KEY, "not json")
            .with_entry(CUSTOM_GAMES_KEY, "{}");
        let model = model_with(Arc::new(store), &[]);

        assert!(model.history().is_empty());
        assert!(model.custom_games().is_empty());
    }
}
