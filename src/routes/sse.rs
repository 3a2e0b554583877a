use std::convert::Infallible;

use axum::{Router, extract::State, response::sse::Sse, routing::get};
use futures::Stream;
use tracing::info;

use crate::{services::sse_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/sse",
    tag = "sse",
    responses((status = 200, description = "Change feed (catalog.updated, session.updated, history.updated)", content_type = "text/event-stream", body = String))
)]
/// Stream model changes to connected frontends.
pub async fn change_stream(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<axum::response::sse::Event, Infallible>>> {
    let (receiver, handshake) = sse_service::subscribe(&state).await;
    info!("New SSE connection");
    sse_service::to_sse_stream(receiver, handshake)
}

/// Configure the SSE endpoint.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/sse", get(change_stream))
}
