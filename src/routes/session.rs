use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::session::{
        FirstPlayerResponse, PlayerSummary, RenamePlayerRequest, SessionSnapshot,
        SetScoreRequest, SetScoreResponse, StartSessionRequest,
    },
    error::AppError,
    services::session_service,
    state::SharedState,
};

/// Routes driving the scoring session.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/session", get(get_session).post(start_session))
        .route("/session/first-player", post(reroll_first_player))
        .route("/session/players/{id}", put(rename_player))
        .route("/session/scores", put(set_score))
}

/// Current roster, first player and score matrix.
#[utoipa::path(
    get,
    path = "/session",
    tag = "session",
    responses(
        (status = 200, description = "Session snapshot", body = SessionSnapshot)
    )
)]
pub async fn get_session(State(state): State<SharedState>) -> Json<SessionSnapshot> {
    Json(session_service::get_session(&state).await)
}

/// Start a session, replacing the roster and the score matrix.
#[utoipa::path(
    post,
    path = "/session",
    tag = "session",
    request_body = StartSessionRequest,
    responses(
        (status = 200, description = "Session started", body = SessionSnapshot),
        (status = 400, description = "Unknown game or invalid counts")
    )
)]
pub async fn start_session(
    State(state): State<SharedState>,
    Json(payload): Json<StartSessionRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    payload.validate()?;
    let snapshot = session_service::start_session(&state, payload).await?;
    Ok(Json(snapshot))
}

/// Draw a new first player at random.
#[utoipa::path(
    post,
    path = "/session/first-player",
    tag = "session",
    responses(
        (status = 200, description = "First player drawn", body = FirstPlayerResponse)
    )
)]
pub async fn reroll_first_player(State(state): State<SharedState>) -> Json<FirstPlayerResponse> {
    Json(session_service::reroll_first_player(&state).await)
}

/// Rename one player.
#[utoipa::path(
    put,
    path = "/session/players/{id}",
    tag = "session",
    params(("id" = Uuid, Path, description = "Player identifier")),
    request_body = RenamePlayerRequest,
    responses(
        (status = 200, description = "Player renamed", body = PlayerSummary),
        (status = 404, description = "Unknown player")
    )
)]
pub async fn rename_player(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RenamePlayerRequest>,
) -> Result<Json<PlayerSummary>, AppError> {
    let player = session_service::rename_player(&state, id, payload).await?;
    Ok(Json(player))
}

/// Store one score cell. Non-numeric values count as zero.
#[utoipa::path(
    put,
    path = "/session/scores",
    tag = "session",
    request_body = SetScoreRequest,
    responses(
        (status = 200, description = "Score stored", body = SetScoreResponse),
        (status = 400, description = "Unknown round or field"),
        (status = 404, description = "Unknown player")
    )
)]
pub async fn set_score(
    State(state): State<SharedState>,
    Json(payload): Json<SetScoreRequest>,
) -> Result<Json<SetScoreResponse>, AppError> {
    let response = session_service::set_score(&state, payload).await?;
    Ok(Json(response))
}
