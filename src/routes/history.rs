use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get},
};
use uuid::Uuid;

use crate::{
    dto::history::{ConfirmQuery, HistoryDeletionResponse, HistoryRecordSummary, HistoryResponse},
    error::AppError,
    services::history_service,
    state::SharedState,
};

/// Routes managing saved sessions.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/history",
            get(list_history).post(commit_session).delete(clear_history),
        )
        .route("/history/{id}", delete(delete_history_entry))
}

/// Saved sessions, most recent first.
#[utoipa::path(
    get,
    path = "/history",
    tag = "history",
    responses(
        (status = 200, description = "Saved sessions", body = HistoryResponse)
    )
)]
pub async fn list_history(State(state): State<SharedState>) -> Json<HistoryResponse> {
    Json(history_service::list(&state).await)
}

/// Save the running session.
#[utoipa::path(
    post,
    path = "/history",
    tag = "history",
    responses(
        (status = 200, description = "Session saved", body = HistoryRecordSummary),
        (status = 404, description = "No game selected")
    )
)]
pub async fn commit_session(
    State(state): State<SharedState>,
) -> Result<Json<HistoryRecordSummary>, AppError> {
    let record = history_service::commit(&state).await?;
    Ok(Json(record))
}

/// Delete every saved session.
#[utoipa::path(
    delete,
    path = "/history",
    tag = "history",
    params(ConfirmQuery),
    responses(
        (status = 200, description = "History cleared", body = HistoryDeletionResponse),
        (status = 428, description = "confirm=true missing")
    )
)]
pub async fn clear_history(
    State(state): State<SharedState>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<HistoryDeletionResponse>, AppError> {
    let response = history_service::clear(&state, query.confirm).await?;
    Ok(Json(response))
}

/// Delete one saved session.
#[utoipa::path(
    delete,
    path = "/history/{id}",
    tag = "history",
    params(
        ("id" = Uuid, Path, description = "History record identifier"),
        ConfirmQuery
    ),
    responses(
        (status = 200, description = "Deletion processed", body = HistoryDeletionResponse),
        (status = 428, description = "confirm=true missing")
    )
)]
pub async fn delete_history_entry(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<HistoryDeletionResponse>, AppError> {
    let response = history_service::delete_entry(&state, id, query.confirm).await?;
    Ok(Json(response))
}
