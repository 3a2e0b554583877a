use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::catalog::{CatalogResponse, CreateCustomGameRequest, GameDefinitionSummary},
    error::AppError,
    services::catalog_service,
    state::SharedState,
};

/// Routes exposing the game catalog.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games", get(list_games))
        .route("/games/reload", post(reload_catalog))
        .route("/games/custom", post(create_custom_game))
}

/// List the games that can currently be started.
#[utoipa::path(
    get,
    path = "/games",
    tag = "catalog",
    responses(
        (status = 200, description = "Selectable games", body = CatalogResponse)
    )
)]
pub async fn list_games(State(state): State<SharedState>) -> Json<CatalogResponse> {
    Json(catalog_service::list_games(&state).await)
}

/// Fetch the built-in catalog again and merge it with the custom games.
#[utoipa::path(
    post,
    path = "/games/reload",
    tag = "catalog",
    responses(
        (status = 200, description = "Catalog reloaded", body = CatalogResponse)
    )
)]
pub async fn reload_catalog(State(state): State<SharedState>) -> Json<CatalogResponse> {
    Json(catalog_service::load_catalog(&state).await)
}

/// Define a game from free-text field names.
#[utoipa::path(
    post,
    path = "/games/custom",
    tag = "catalog",
    request_body = CreateCustomGameRequest,
    responses(
        (status = 200, description = "Custom game stored", body = GameDefinitionSummary),
        (status = 400, description = "Empty name or no usable field")
    )
)]
pub async fn create_custom_game(
    State(state): State<SharedState>,
    Json(payload): Json<CreateCustomGameRequest>,
) -> Result<Json<GameDefinitionSummary>, AppError> {
    let game = catalog_service::add_custom_game(&state, payload).await?;
    Ok(Json(game))
}
