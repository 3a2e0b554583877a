/// Catalog loading and user-defined games.
pub mod catalog_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Saved session history.
pub mod history_service;
/// Session lifecycle and score entry.
pub mod session_service;
/// Server-Sent Events message generation.
pub mod sse_events;
/// Server-Sent Events broadcasting service.
pub mod sse_service;
/// Per-round and overall rankings.
pub mod standings_service;
