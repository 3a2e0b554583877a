use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the tabletop scorer.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::sse::change_stream,
        crate::routes::catalog::list_games,
        crate::routes::catalog::reload_catalog,
        crate::routes::catalog::create_custom_game,
        crate::routes::session::get_session,
        crate::routes::session::start_session,
        crate::routes::session::reroll_first_player,
        crate::routes::session::rename_player,
        crate::routes::session::set_score,
        crate::routes::standings::overall,
        crate::routes::standings::for_round,
        crate::routes::history::list_history,
        crate::routes::history::commit_session,
        crate::routes::history::clear_history,
        crate::routes::history::delete_history_entry,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::sse::Handshake,
            crate::dto::catalog::CatalogResponse,
            crate::dto::catalog::GameDefinitionSummary,
            crate::dto::catalog::ScoringFieldSummary,
            crate::dto::catalog::CreateCustomGameRequest,
            crate::dto::session::StartSessionRequest,
            crate::dto::session::RenamePlayerRequest,
            crate::dto::session::SetScoreRequest,
            crate::dto::session::SetScoreResponse,
            crate::dto::session::PlayerSummary,
            crate::dto::session::FirstPlayerResponse,
            crate::dto::session::SessionSnapshot,
            crate::dto::standings::StandingsResponse,
            crate::dto::standings::StandingEntry,
            crate::dto::history::HistoryResponse,
            crate::dto::history::HistoryRecordSummary,
            crate::dto::history::HistoryDeletionResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sse", description = "Server-sent events stream"),
        (name = "catalog", description = "Game catalog and custom games"),
        (name = "session", description = "Roster, first player and score entry"),
        (name = "standings", description = "Per-round and overall rankings"),
        (name = "history", description = "Saved sessions"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/healthcheck",
            "/sse",
            "/games",
            "/games/custom",
            "/session",
            "/session/scores",
            "/standings/rounds/{round}",
            "/history/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
