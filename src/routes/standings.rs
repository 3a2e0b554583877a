use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::standings::StandingsResponse, error::AppError, services::standings_service,
    state::SharedState,
};

/// Routes exposing rankings.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/standings", get(overall))
        .route("/standings/rounds/{round}", get(for_round))
}

/// Players ranked by overall total.
#[utoipa::path(
    get,
    path = "/standings",
    tag = "standings",
    responses(
        (status = 200, description = "Overall standings", body = StandingsResponse)
    )
)]
pub async fn overall(State(state): State<SharedState>) -> Json<StandingsResponse> {
    Json(standings_service::overall(&state).await)
}

/// Players ranked by their total in one round.
#[utoipa::path(
    get,
    path = "/standings/rounds/{round}",
    tag = "standings",
    params(("round" = usize, Path, description = "0-based round index")),
    responses(
        (status = 200, description = "Round standings", body = StandingsResponse),
        (status = 400, description = "Round out of range")
    )
)]
pub async fn for_round(
    State(state): State<SharedState>,
    Path(round): Path<usize>,
) -> Result<Json<StandingsResponse>, AppError> {
    let standings = standings_service::for_round(&state, round).await?;
    Ok(Json(standings))
}
