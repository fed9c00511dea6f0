//! Time, weather, difficulty and saving

use crate::AppState;
use crate::envelope::{ApiResponse, Payload};
use crate::models::{AddTime, DifficultySetting, TimeSetting, WeatherSetting};
use axum::Router;
use axum::extract::State;
use axum::routing::post;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/time", post(set_time))
        .route("/time/add", post(add_time))
        .route("/weather", post(set_weather))
        .route("/difficulty", post(set_difficulty))
        .route("/save", post(save_all))
        .route("/save/on", post(save_on))
        .route("/save/off", post(save_off))
}

async fn set_time(
    State(state): State<AppState>,
    Payload(body): Payload<TimeSetting>,
) -> ApiResponse {
    ApiResponse::from_result(state.console.set_time(&body.time.to_string()).await)
}

async fn add_time(State(state): State<AppState>, Payload(body): Payload<AddTime>) -> ApiResponse {
    ApiResponse::from_result(state.console.add_time(body.time).await)
}

async fn set_weather(
    State(state): State<AppState>,
    Payload(body): Payload<WeatherSetting>,
) -> ApiResponse {
    ApiResponse::from_result(
        state
            .console
            .set_weather(&body.weather, body.duration)
            .await,
    )
}

async fn set_difficulty(
    State(state): State<AppState>,
    Payload(body): Payload<DifficultySetting>,
) -> ApiResponse {
    ApiResponse::from_result(state.console.set_difficulty(&body.difficulty).await)
}

async fn save_all(State(state): State<AppState>) -> ApiResponse {
    ApiResponse::from_result(state.console.save_all().await)
}

async fn save_on(State(state): State<AppState>) -> ApiResponse {
    ApiResponse::from_result(state.console.save_on().await)
}

async fn save_off(State(state): State<AppState>) -> ApiResponse {
    ApiResponse::from_result(state.console.save_off().await)
}
