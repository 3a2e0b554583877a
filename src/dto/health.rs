use serde::Serialize;
use utoipa::ToSchema;

/// Response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: String,
    /// Why the durable store is unusable, when degraded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl HealthResponse {
    /// The durable store answered its health check.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            detail: None,
        }
    }

    /// The durable store cannot be written; saves will be lost.
    pub fn degraded(detail: impl Into<String>) -> Self {
        Self {
            status: "degraded".to_string(),
            detail: Some(detail.into()),
        }
    }
}
