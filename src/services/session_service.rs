//! Session lifecycle: start, first player, roster names and score entry.

use uuid::Uuid;

use crate::{
    dto::session::{
        FirstPlayerResponse, PlayerSummary, RenamePlayerRequest, SessionSnapshot,
        SetScoreRequest, SetScoreResponse, StartSessionRequest,
    },
    error::ServiceError,
    services::sse_events,
    state::{SharedState, scores::coerce_score},
};

/// Start a session for a game of the loaded catalog.
pub async fn start_session(
    state: &SharedState,
    request: StartSessionRequest,
) -> Result<SessionSnapshot, ServiceError> {
    let snapshot = {
        let mut model = state.model().write().await;
        let game = match request.game.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Some(model.find_game(name).cloned().ok_or_else(
                || ServiceError::InvalidInput(format!("game `{name}` is not in the catalog")),
            )?),
            _ => None,
        };

        model.start_session(game, request.player_count, request.round_count)?;
        SessionSnapshot::from(&*model)
    };

    sse_events::broadcast_session_updated(state, &snapshot);
    Ok(snapshot)
}

/// Return the current session snapshot.
pub async fn get_session(state: &SharedState) -> SessionSnapshot {
    let model = state.model().read().await;
    SessionSnapshot::from(&*model)
}

/// Draw a new first player.
pub async fn reroll_first_player(state: &SharedState) -> FirstPlayerResponse {
    let (response, snapshot) = {
        let mut model = state.model().write().await;
        let first_player = model.reroll_first_player().map(PlayerSummary::from);
        (FirstPlayerResponse { first_player }, SessionSnapshot::from(&*model))
    };

    sse_events::broadcast_session_updated(state, &snapshot);
    response
}

/// Rename one player of the roster.
pub async fn rename_player(
    state: &SharedState,
    id: Uuid,
    request: RenamePlayerRequest,
) -> Result<PlayerSummary, ServiceError> {
    let (player, snapshot) = {
        let mut model = state.model().write().await;
        let player = PlayerSummary::from(model.rename_player(id, request.name)?);
        (player, SessionSnapshot::from(&*model))
    };

    sse_events::broadcast_session_updated(state, &snapshot);
    Ok(player)
}

/// Store one score cell, coercing non-numeric input to zero.
pub async fn set_score(
    state: &SharedState,
    request: SetScoreRequest,
) -> Result<SetScoreResponse, ServiceError> {
    let SetScoreRequest {
        round,
        player_id,
        field,
        value,
    } = request;

    let (response, snapshot) = {
        let mut model = state.model().write().await;
        let value = model.set_score(round, player_id, &field, coerce_score(&value))?;
        let response = SetScoreResponse {
            round,
            player_id,
            value,
            round_total: model.round_total(round, player_id),
            overall_total: model.overall_total(player_id),
            field,
        };
        (response, SessionSnapshot::from(&*model))
    };

    sse_events::broadcast_session_updated(state, &snapshot);
    Ok(response)
}
