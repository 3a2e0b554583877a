use axum::Router;

use crate::state::SharedState;

/// `/games` endpoints.
pub mod catalog;
/// Swagger UI and OpenAPI document.
pub mod docs;
/// `/healthcheck` endpoint.
pub mod health;
/// `/history` endpoints.
pub mod history;
/// `/session` endpoints.
pub mod session;
/// `/sse` change feed.
pub mod sse;
/// `/standings` endpoints.
pub mod standings;

/// Compose all route trees, including the documentation routes, and attach the shared state.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(sse::router())
        .merge(catalog::router())
        .merge(session::router())
        .merge(standings::router())
        .merge(history::router())
        .merge(docs::router());

    api_router.with_state(state)
}
