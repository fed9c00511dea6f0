//! Whitelist management

use crate::AppState;
use crate::envelope::{ApiResponse, Payload};
use crate::models::PlayerAction;
use axum::Router;
use axum::extract::State;
use axum::routing::{get, post};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add))
        .route("/remove", post(remove))
        .route("/list", get(list))
        .route("/reload", post(reload))
        .route("/on", post(enable))
        .route("/off", post(disable))
}

async fn add(State(state): State<AppState>, Payload(body): Payload<PlayerAction>) -> ApiResponse {
    ApiResponse::from_result(state.console.whitelist_add(&body.player).await)
}

async fn remove(
    State(state): State<AppState>,
    Payload(body): Payload<PlayerAction>,
) -> ApiResponse {
    ApiResponse::from_result(state.console.whitelist_remove(&body.player).await)
}

async fn list(State(state): State<AppState>) -> ApiResponse {
    ApiResponse::from_result(state.console.whitelist_list().await)
}

async fn reload(State(state): State<AppState>) -> ApiResponse {
    ApiResponse::from_result(state.console.whitelist_reload().await)
}

async fn enable(State(state): State<AppState>) -> ApiResponse {
    ApiResponse::from_result(state.console.whitelist_on().await)
}

async fn disable(State(state): State<AppState>) -> ApiResponse {
    ApiResponse::from_result(state.console.whitelist_off().await)
}
