use serde::Serialize;
use utoipa::ToSchema;

/// Named change notification with a JSON body, as pushed on `/sse`.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    /// SSE `event:` line, e.g. `session.updated`.
    pub name: &'static str,
    /// Serialized JSON body.
    pub data: String,
}

impl ServerEvent {
    /// Serialize `payload` as the body of event `name`.
    pub fn json<T: Serialize>(name: &'static str, payload: &T) -> serde_json::Result<Self> {
        Ok(Self {
            name,
            data: serde_json::to_string(payload)?,
        })
    }
}

/// Sent first to every new subscriber, before any change event.
#[derive(Debug, Serialize, ToSchema)]
pub struct Handshake {
    /// Confirmation text.
    pub message: String,
    /// Games in the loaded catalog; 0 while the catalog is still loading.
    pub games: usize,
    /// Whether a game is selected.
    pub session_active: bool,
    /// Subscribers connected, this one included.
    pub subscribers: usize,
}
