//! Route table

mod nodes;
mod player;
mod server;
mod system;
mod tasks;
mod whitelist;
mod world;

use crate::AppState;
use crate::envelope::ApiResponse;
use axum::Router;
use axum::http::{Method, StatusCode, Uri};
use tower_http::trace::TraceLayer;

/// Build the full router, all groups under `/api/v1`
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1/player", player::router())
        .nest("/api/v1/world", world::router())
        .nest("/api/v1/whitelist", whitelist::router())
        .nest("/api/v1/server", server::router())
        .nest("/api/v1/tasks", tasks::router())
        .nest("/api/v1/nodes", nodes::router())
        .nest("/api/v1/system", system::router())
        .fallback(unknown_route)
        .method_not_allowed_fallback(unsupported_method)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn unknown_route(method: Method, uri: Uri) -> ApiResponse {
    ApiResponse::failure(
        StatusCode::NOT_FOUND,
        format!("no route for {} {}", method, uri.path()),
    )
}

async fn unsupported_method(method: Method, uri: Uri) -> ApiResponse {
    ApiResponse::failure(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("{} is not supported on {}", method, uri.path()),
    )
}
