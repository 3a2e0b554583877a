/// Games, players and standings.
pub mod game;
/// Saved session records.
pub mod history;
/// The score model and its operations.
pub mod model;
/// First-player draws.
pub mod random;
/// Per-round score grid.
pub mod scores;
mod sse;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::dao::{catalog::CatalogSource, kv_store::KeyValueStore};

pub use self::model::{ModelError, ScoreModel};
pub use self::sse::SseHub;

/// Handle shared by every handler and background task.
pub type SharedState = Arc<AppState>;

/// Default capacity of the change-feed broadcast channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 16;

/// Central application state: the score model plus the handles its services need.
pub struct AppState {
    model: RwLock<ScoreModel>,
    store: Arc<dyn KeyValueStore>,
    catalog_source: CatalogSource,
    events: SseHub,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// `store` must be the same store the model was built on; it is kept here for health checks.
    pub fn new(
        model: ScoreModel,
        store: Arc<dyn KeyValueStore>,
        catalog_source: CatalogSource,
        event_capacity: usize,
    ) -> SharedState {
        Arc::new(Self {
            model: RwLock::new(model),
            store,
            catalog_source,
            events: SseHub::new(event_capacity),
        })
    }

    /// The score model. Hold the guard only for the duration of one operation.
    pub fn model(&self) -> &RwLock<ScoreModel> {
        &self.model
    }

    /// Durable store backing history and custom games.
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Where the built-in catalog is fetched from.
    pub fn catalog_source(&self) -> &CatalogSource {
        &self.catalog_source
    }

    /// Broadcast hub feeding the change stream.
    pub fn events(&self) -> &SseHub {
        &self.events
    }
}
