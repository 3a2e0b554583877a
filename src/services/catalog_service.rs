//! Catalog loading and user-defined games.

use tracing::info;

use crate::{
    dto::catalog::{CatalogResponse, CreateCustomGameRequest, GameDefinitionSummary},
    error::ServiceError,
    services::sse_events,
    state::{SharedState, game::GameDefinition},
};

/// Fetch the built-in catalog and merge it with the custom games.
///
/// The fetch runs without holding the model lock, so other operations proceed
/// against the previous (possibly empty) list meanwhile. Failures fall back to
/// custom games only.
pub async fn load_catalog(state: &SharedState) -> CatalogResponse {
    let source = state.catalog_source();
    let fetched = source
        .fetch()
        .await
        .map(|games| {
            games
                .into_iter()
                .map(GameDefinition::from)
                .collect::<Vec<_>>()
        });
    if let Ok(games) = &fetched {
        info!(source = %source.describe(), count = games.len(), "built-in catalog fetched");
    }

    let response = {
        let mut model = state.model().write().await;
        CatalogResponse::from(model.load_catalog(fetched))
    };
    sse_events::broadcast_catalog_updated(state, &response);
    response
}

/// Return the games currently selectable.
pub async fn list_games(state: &SharedState) -> CatalogResponse {
    let model = state.model().read().await;
    CatalogResponse::from(model.games())
}

/// Define and persist a new user game.
pub async fn add_custom_game(
    state: &SharedState,
    request: CreateCustomGameRequest,
) -> Result<GameDefinitionSummary, ServiceError> {
    let (summary, catalog) = {
        let mut model = state.model().write().await;
        let game = model.add_custom_game(&request.name, &request.field_names)?;
        (
            GameDefinitionSummary::from(&game),
            CatalogResponse::from(model.games()),
        )
    };

    sse_events::broadcast_catalog_updated(state, &catalog);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::test_state;

    #[tokio::test]
    async fn load_catalog_merges_embedded_and_custom_games() {
        let state = test_state();
        add_custom_game(
            &state,
            CreateCustomGameRequest {
                name: "Kitchen Quiz".into(),
                field_names: vec!["Food".into(), "Drink".into()],
            },
        )
        .await
        .unwrap();

        let catalog = load_catalog(&state).await;
        assert!(catalog.games.len() > 1);
        assert_eq!(catalog.games.last().unwrap().name, "Kitchen Quiz");
        assert_eq!(list_games(&state).await.games.len(), catalog.games.len());
    }

    #[tokio::test]
    async fn invalid_custom_game_is_rejected() {
        let state = test_state();
        let err = add_custom_game(
            &state,
            CreateCustomGameRequest {
                name: "".into(),
                field_names: vec!["Points".into()],
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert!(list_games(&state).await.games.is_empty());
    }
}
