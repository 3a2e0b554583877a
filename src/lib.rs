//! Library crate for tabletop-scorer, exposing modules for binaries and integration tests.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Application configuration loading.
pub mod config;
/// Persistence: catalog sources, key-value storage and stored layouts.
pub mod dao;
/// Request and response shapes of the HTTP API.
pub mod dto;
/// Error types and their HTTP rendering.
pub mod error;
/// HTTP routers and handlers.
pub mod routes;
/// Operations shared by handlers and background tasks.
pub mod services;
/// Domain model and shared application state.
pub mod state;

/// Build the top-level router and attach cross-cutting middleware layers.
pub fn app(state: state::SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
