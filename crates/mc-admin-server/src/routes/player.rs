//! Player messaging, moderation, items and teleport

use crate::AppState;
use crate::envelope::{ApiResponse, Payload};
use crate::models::{
    BroadcastMessage, ClearInventory, CustomBroadcastMessage, GameModeSetting, GiveItem, IpAction,
    KickBanPlayer, PlayerAction, PrivateMessage, Teleport, TeleportCoordinates,
};
use axum::Router;
use axum::extract::State;
use axum::routing::{get, post};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(list_players))
        .route("/broadcast", post(broadcast))
        .route("/broadcast/custom", post(custom_broadcast))
        .route("/tell", post(tell))
        .route("/give", post(give_item))
        .route("/clear", post(clear_inventory))
        .route("/teleport", post(teleport))
        .route("/teleport/coordinates", post(teleport_to_coordinates))
        .route("/gamemode", post(set_game_mode))
        .route("/kick", post(kick))
        .route("/ban", post(ban))
        .route("/pardon", post(pardon))
        .route("/ban-ip", post(ban_ip))
        .route("/pardon-ip", post(pardon_ip))
}

async fn list_players(State(state): State<AppState>) -> ApiResponse {
    ApiResponse::from_result(state.console.list_players().await)
}

async fn broadcast(
    State(state): State<AppState>,
    Payload(body): Payload<BroadcastMessage>,
) -> ApiResponse {
    ApiResponse::from_result(state.console.broadcast(&body.message).await)
}

async fn custom_broadcast(
    State(state): State<AppState>,
    Payload(body): Payload<CustomBroadcastMessage>,
) -> ApiResponse {
    ApiResponse::from_result(
        state
            .console
            .custom_broadcast(&body.sender, &body.message)
            .await,
    )
}

async fn tell(
    State(state): State<AppState>,
    Payload(body): Payload<PrivateMessage>,
) -> ApiResponse {
    ApiResponse::from_result(state.console.tell(&body.player, &body.message).await)
}

async fn give_item(
    State(state): State<AppState>,
    Payload(body): Payload<GiveItem>,
) -> ApiResponse {
    ApiResponse::from_result(
        state
            .console
            .give_item(&body.player, &body.item, body.count.get(), body.data)
            .await,
    )
}

async fn clear_inventory(
    State(state): State<AppState>,
    Payload(body): Payload<ClearInventory>,
) -> ApiResponse {
    ApiResponse::from_result(
        state
            .console
            .clear_inventory(&body.player, body.item.as_deref(), body.count)
            .await,
    )
}

async fn teleport(
    State(state): State<AppState>,
    Payload(body): Payload<Teleport>,
) -> ApiResponse {
    ApiResponse::from_result(state.console.teleport(&body.player, &body.target).await)
}

async fn teleport_to_coordinates(
    State(state): State<AppState>,
    Payload(tp): Payload<TeleportCoordinates>,
) -> ApiResponse {
    let result = match (tp.yaw, tp.pitch) {
        (Some(yaw), Some(pitch)) => {
            state
                .console
                .teleport_with_rotation(&tp.player, tp.x, tp.y, tp.z, yaw, pitch)
                .await
        }
        _ => {
            state
                .console
                .teleport_to_coordinates(&tp.player, tp.x, tp.y, tp.z)
                .await
        }
    };
    ApiResponse::from_result(result)
}

async fn set_game_mode(
    State(state): State<AppState>,
    Payload(body): Payload<GameModeSetting>,
) -> ApiResponse {
    ApiResponse::from_result(state.console.set_game_mode(&body.player, &body.mode).await)
}

async fn kick(
    State(state): State<AppState>,
    Payload(body): Payload<KickBanPlayer>,
) -> ApiResponse {
    ApiResponse::from_result(
        state
            .console
            .kick(&body.player, body.reason.as_deref())
            .await,
    )
}

async fn ban(
    State(state): State<AppState>,
    Payload(body): Payload<KickBanPlayer>,
) -> ApiResponse {
    ApiResponse::from_result(state.console.ban(&body.player, body.reason.as_deref()).await)
}

async fn pardon(
    State(state): State<AppState>,
    Payload(body): Payload<PlayerAction>,
) -> ApiResponse {
    ApiResponse::from_result(state.console.pardon(&body.player).await)
}

async fn ban_ip(State(state): State<AppState>, Payload(body): Payload<IpAction>) -> ApiResponse {
    ApiResponse::from_result(state.console.ban_ip(&body.ip).await)
}

async fn pardon_ip(
    State(state): State<AppState>,
    Payload(body): Payload<IpAction>,
) -> ApiResponse {
    ApiResponse::from_result(state.console.pardon_ip(&body.ip).await)
}
