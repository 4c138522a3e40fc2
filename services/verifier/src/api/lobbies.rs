//! Demo dataset handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::models::{HistoryItem, LobbyWithPlayers, Player, UserStats};
use crate::state::AppState;

pub async fn list_lobbies(State(state): State<Arc<AppState>>) -> Json<Vec<LobbyWithPlayers>> {
    Json(state.demo.lobbies.clone())
}

pub async fn get_lobby(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<LobbyWithPlayers>, ApiError> {
    state
        .demo
        .lobby(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("lobby {id}")))
}

pub async fn history(State(state): State<Arc<AppState>>) -> Json<Vec<HistoryItem>> {
    Json(state.demo.history())
}

pub async fn user_stats(State(state): State<Arc<AppState>>) -> Json<UserStats> {
    Json(state.demo.stats.clone())
}

pub async fn current_user(State(state): State<Arc<AppState>>) -> Json<Player> {
    Json(state.demo.current_user.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VerifierConfig;
    use crate::router;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let state = Arc::new(AppState::with_vision(VerifierConfig::default(), None));
        let response = router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn lists_demo_lobbies() {
        let (status, body) = get("/api/lobbies").await;
        assert_eq!(status, StatusCode::OK);
        let lobbies = body.as_array().unwrap();
        assert_eq!(lobbies.len(), 3);
        assert_eq!(lobbies[0]["name"], "Morning Gym Squad");
        assert_eq!(lobbies[0]["entryFee"], 10);
        assert_eq!(lobbies[0]["players"][0]["name"], "Alice");
    }

    #[tokio::test]
    async fn lobby_detail_and_missing_lobby() {
        let (status, body) = get("/api/lobbies/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["taskDescription"], "Wake up before 7am");
        assert_eq!(body["players"].as_array().unwrap().len(), 4);

        let (status, body) = get("/api/lobbies/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "lobby 99 not found");
    }

    #[tokio::test]
    async fn history_stats_and_current_user() {
        let (_, history) = get("/api/history").await;
        assert_eq!(history[1]["result"], "loss");
        assert_eq!(history[1]["amount"], -10);

        let (_, stats) = get("/api/stats").await;
        assert_eq!(stats["winRate"], 67);
        assert_eq!(stats["totalWinnings"], 200);

        let (_, me) = get("/api/me").await;
        assert_eq!(me["hasDeposited"], false);
    }

    #[tokio::test]
    async fn health_reports_mock_mode() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "mock");
    }
}
