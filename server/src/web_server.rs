use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use snake_engine::log;

use crate::score_store::{ScoreRecord, ScoreStore};
use crate::server_config::ServerConfig;

#[derive(Clone)]
pub struct WebServerState {
    pub score_store: ScoreStore,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreRequest {
    pub player_name: String,
    pub score: u32,
}

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

pub async fn run_web_server(config: &ServerConfig, score_store: ScoreStore) {
    let state = WebServerState { score_store };
    let app = build_router(state, &config.static_files_path);

    let addr = config.bind_address.as_str();
    log!("Web server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind web server address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Web server error");
}

fn build_router(state: WebServerState, static_files_path: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/scores",
            get(get_scores_handler).post(post_score_handler),
        )
        .nest_service("/ui", ServeDir::new(static_files_path))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");

    log!("Shutdown signal received");
}

async fn get_scores_handler(State(state): State<WebServerState>) -> Json<Vec<ScoreRecord>> {
    Json(state.score_store.top_scores().await)
}

async fn post_score_handler(
    State(state): State<WebServerState>,
    Json(request): Json<SubmitScoreRequest>,
) -> Result<(StatusCode, Json<ScoreRecord>), (StatusCode, Json<ErrorMessage>)> {
    match state
        .score_store
        .add(&request.player_name, request.score)
        .await
    {
        Ok(record) => {
            log!("Stored score {} for {}", record.score, record.player_name);
            Ok((StatusCode::CREATED, Json(record)))
        }
        Err(message) => {
            log!(
                "Failed to store score for {}: {}",
                request.player_name,
                message
            );
            Err((StatusCode::BAD_REQUEST, Json(ErrorMessage { message })))
        }
    }
}
