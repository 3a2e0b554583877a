use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report whether the durable store accepts writes and whether any save failed since.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.store().health_check() {
        Ok(()) => HealthResponse::ok(),
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            HealthResponse::degraded(err.to_string())
        }
    }
}
