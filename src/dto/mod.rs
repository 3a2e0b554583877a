//! API data transfer objects.

use std::time::SystemTime;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Game catalog payloads.
pub mod catalog;
/// Health check payloads.
pub mod health;
/// Saved session payloads.
pub mod history;
/// Session, roster and score payloads.
pub mod session;
/// SSE handshake payload.
pub mod sse;
/// Ranking payloads.
pub mod standings;

fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
