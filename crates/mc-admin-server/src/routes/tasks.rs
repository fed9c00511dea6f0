//! Task registry endpoints

use crate::AppState;
use crate::envelope::{ApiResponse, Payload};
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use serde_json::Value;
use tracing::info;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/{task_id}", get(get_task))
        .route("/{task_id}/stop", post(stop_task))
}

async fn create_task(
    State(state): State<AppState>,
    Payload(config): Payload<Value>,
) -> ApiResponse {
    let created = state.tasks.write().await.create(config);
    info!("Created {}", created.task_id);
    ApiResponse::success(created)
}

async fn list_tasks(State(state): State<AppState>) -> ApiResponse {
    ApiResponse::success(state.tasks.read().await.list())
}

async fn get_task(State(state): State<AppState>, Path(task_id): Path<String>) -> ApiResponse {
    let tasks = state.tasks.read().await;
    ApiResponse::from_result(tasks.get(&task_id))
}

async fn stop_task(State(state): State<AppState>, Path(task_id): Path<String>) -> ApiResponse {
    ApiResponse::from_result(state.tasks.write().await.stop(&task_id))
}
