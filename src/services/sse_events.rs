use serde::Serialize;
use tracing::warn;

use crate::{
    dto::{
        catalog::CatalogResponse, history::HistoryResponse, session::SessionSnapshot,
        sse::ServerEvent,
    },
    state::SharedState,
};

const EVENT_CATALOG_UPDATED: &str = "catalog.updated";
const EVENT_SESSION_UPDATED: &str = "session.updated";
const EVENT_HISTORY_UPDATED: &str = "history.updated";

/// Broadcast the merged game list after a load or a custom game addition.
pub fn broadcast_catalog_updated(state: &SharedState, catalog: &CatalogResponse) {
    send_event(state, EVENT_CATALOG_UPDATED, catalog);
}

/// Broadcast the session snapshot after any roster, score or first-player change.
pub fn broadcast_session_updated(state: &SharedState, snapshot: &SessionSnapshot) {
    send_event(state, EVENT_SESSION_UPDATED, snapshot);
}

/// Broadcast the full history list after a save or a deletion.
pub fn broadcast_history_updated(state: &SharedState, history: &HistoryResponse) {
    send_event(state, EVENT_HISTORY_UPDATED, history);
}

fn send_event(state: &SharedState, event: &'static str, payload: &impl Serialize) {
    match ServerEvent::json(event, payload) {
        Ok(event) => state.events().publish(event),
        Err(err) => warn!(event, error = %err, "failed to serialize SSE payload"),
    }
}
