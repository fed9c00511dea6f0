//! Node registry endpoints

use crate::AppState;
use crate::envelope::ApiResponse;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use tracing::info;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_nodes))
        .route("/{node_id}", get(get_node))
        .route("/{node_id}/drain", post(drain_node))
}

async fn list_nodes(State(state): State<AppState>) -> ApiResponse {
    ApiResponse::success(state.nodes.read().await.list())
}

async fn get_node(State(state): State<AppState>, Path(node_id): Path<String>) -> ApiResponse {
    let nodes = state.nodes.read().await;
    ApiResponse::from_result(nodes.get(&node_id))
}

async fn drain_node(State(state): State<AppState>, Path(node_id): Path<String>) -> ApiResponse {
    let result = state.nodes.write().await.drain(&node_id);
    if result.is_ok() {
        info!("Draining {}", node_id);
    }
    ApiResponse::from_result(result)
}
