use crate::{dto::standings::StandingsResponse, error::ServiceError, state::SharedState};

/// Players ranked by their total across every round.
pub async fn overall(state: &SharedState) -> StandingsResponse {
    let model = state.model().read().await;
    StandingsResponse::ranked(None, &model.overall_standings())
}

/// Players ranked by their total in one round (0-based).
pub async fn for_round(state: &SharedState, round: usize) -> Result<StandingsResponse, ServiceError> {
    let model = state.model().read().await;
    if round >= model.round_count() {
        return Err(ServiceError::InvalidInput(format!(
            "round {round} is out of range (session has {} rounds)",
            model.round_count()
        )));
    }
    Ok(StandingsResponse::ranked(
        Some(round),
        &model.standings_for_round(round),
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        dto::session::{SetScoreRequest, StartSessionRequest},
        services::{catalog_service, session_service, test_support::test_state},
    };

    #[tokio::test]
    async fn round_standings_follow_scores() {
        let state = test_state();
        catalog_service::load_catalog(&state).await;
        let snapshot = session_service::start_session(
            &state,
            StartSessionRequest {
                game: Some("Wizard Duel".into()),
                player_count: 2,
                round_count: Some(2),
            },
        )
        .await
        .unwrap();
        let first = snapshot.players[0].id;
        let second = snapshot.players[1].id;

        for (player, field, value) in [(first, "spells", 1), (second, "spells", 3), (second, "mana", 1)] {
            session_service::set_score(
                &state,
                SetScoreRequest {
                    round: 0,
                    player_id: player,
                    field: field.into(),
                    value: json!(value),
                },
            )
            .await
            .unwrap();
        }

        let round = for_round(&state, 0).await.unwrap();
        assert_eq!(round.round, Some(0));
        assert_eq!(round.standings[0].player.id, second);
        assert_eq!(round.standings[0].total, 4.0);
        assert_eq!(round.standings[1].rank, 2);

        let empty_round = for_round(&state, 1).await.unwrap();
        assert!(empty_round.standings.iter().all(|entry| entry.rank == 1));

        let overall = overall(&state).await;
        assert_eq!(overall.round, None);
        assert_eq!(overall.standings[0].player.id, second);
    }

    #[tokio::test]
    async fn out_of_range_round_is_rejected() {
        let state = test_state();
        let err = for_round(&state, 0).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }
}
