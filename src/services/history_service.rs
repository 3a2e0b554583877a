//! Saved sessions: commit, listing and confirmed deletions.

use tracing::debug;
use uuid::Uuid;

use crate::{
    dto::history::{HistoryDeletionResponse, HistoryRecordSummary, HistoryResponse},
    error::ServiceError,
    services::sse_events,
    state::SharedState,
};

/// Saved sessions, most recent first.
pub async fn list(state: &SharedState) -> HistoryResponse {
    let model = state.model().read().await;
    HistoryResponse::from(model.history())
}

/// Snapshot the running session into the history.
pub async fn commit(state: &SharedState) -> Result<HistoryRecordSummary, ServiceError> {
    let (record, history) = {
        let mut model = state.model().write().await;
        let record = model
            .commit_to_history()
            .ok_or_else(|| ServiceError::NotFound("no game selected to save".into()))?;
        (
            HistoryRecordSummary::from(&record),
            HistoryResponse::from(model.history()),
        )
    };

    sse_events::broadcast_history_updated(state, &history);
    Ok(record)
}

/// Remove one record. Unknown ids are a no-op.
pub async fn delete_entry(
    state: &SharedState,
    id: Uuid,
    confirm: bool,
) -> Result<HistoryDeletionResponse, ServiceError> {
    require_confirmation(confirm, "delete history record")?;

    let (removed, history) = {
        let mut model = state.model().write().await;
        let removed = model.delete_history_entry(id);
        (removed, HistoryResponse::from(model.history()))
    };

    if removed {
        sse_events::broadcast_history_updated(state, &history);
    } else {
        debug!(%id, "history record not found; nothing deleted");
    }
    Ok(HistoryDeletionResponse {
        removed: usize::from(removed),
    })
}

/// Remove every record.
pub async fn clear(state: &SharedState, confirm: bool) -> Result<HistoryDeletionResponse, ServiceError> {
    require_confirmation(confirm, "clear history")?;

    let (removed, history) = {
        let mut model = state.model().write().await;
        let removed = model.clear_history();
        (removed, HistoryResponse::from(model.history()))
    };

    sse_events::broadcast_history_updated(state, &history);
    Ok(HistoryDeletionResponse { removed })
}

fn require_confirmation(confirm: bool, action: &str) -> Result<(), ServiceError> {
    if confirm {
        Ok(())
    } else {
        Err(ServiceError::ConfirmationRequired(format!(
            "{action} requires confirm=true"
        )))
    }
}
