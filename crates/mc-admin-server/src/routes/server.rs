//! Server lifecycle

use crate::AppState;
use crate::envelope::ApiResponse;
use axum::Router;
use axum::extract::State;
use axum::routing::post;
use tracing::info;

pub fn router() -> Router<AppState> {
    Router::new().route("/stop", post(stop_server))
}

async fn stop_server(State(state): State<AppState>) -> ApiResponse {
    info!("Stop requested for game server");
    ApiResponse::from_result(state.console.stop_server().await)
}
