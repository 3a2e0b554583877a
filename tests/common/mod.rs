use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tabletop_scorer::app;
use tabletop_scorer::dao::catalog::CatalogSource;
use tabletop_scorer::dao::kv_store::{FileKeyValueStore, KeyValueStore};
use tabletop_scorer::services::catalog_service;
use tabletop_scorer::state::random::StdRandom;
use tabletop_scorer::state::{AppState, DEFAULT_EVENT_CAPACITY, ScoreModel};

pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a server over a file store rooted at `data_dir`, with the embedded catalog loaded.
    pub async fn new(data_dir: &Path) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(data_dir));
        let model = ScoreModel::new(store.clone(), Box::new(StdRandom::seeded(42)));
        let state = AppState::new(
            model,
            store,
            CatalogSource::Embedded,
            DEFAULT_EVENT_CAPACITY,
        );
        catalog_service::load_catalog(&state).await;

        let router = app(state);
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            _shutdown: handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a session and return its snapshot.
pub async fn start_session(
    server: &TestServer,
    game: &str,
    player_count: usize,
) -> serde_json::Value {
    let resp = reqwest::Client::new()
        .post(server.url("/session"))
        .json(&serde_json::json!({ "game": game, "player_count": player_count }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

/// Store one score cell and return the response body.
pub async fn set_score(
    server: &TestServer,
    round: usize,
    player_id: &serde_json::Value,
    field: &str,
    value: serde_json::Value,
) -> serde_json::Value {
    let resp = reqwest::Client::new()
        .put(server.url("/session/scores"))
        .json(&serde_json::json!({
            "round": round,
            "player_id": player_id,
            "field": field,
            "value": value,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}
