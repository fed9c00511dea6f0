//! HTTP → RCON round trip against an in-process fake game server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use mc_admin_core::RconConfig;
use mc_admin_server::{AdminServer, ApiResponse};
use mc_rcon::packet::packet_type;
use mc_rcon::{Console, RconPacket};
use serde_json::json;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tower::ServiceExt;

const PASSWORD: &str = "minecraft";

async fn read_packet(stream: &mut TcpStream) -> Option<RconPacket> {
    let mut size_buf = [0u8; 4];
    stream.read_exact(&mut size_buf).await.ok()?;
    let mut data = vec![0u8; i32::from_le_bytes(size_buf) as usize];
    stream.read_exact(&mut data).await.ok()?;
    RconPacket::from_bytes(&data).ok()
}

/// Answers `whitelist add <p>` the way a vanilla server does
fn reply_for(command: &str) -> String {
    match command.strip_prefix("whitelist add ") {
        Some(player) => format!("Added {} to the whitelist", player),
        None => format!("Unknown command: {}", command),
    }
}

async fn serve_connection(mut stream: TcpStream) {
    let Some(auth) = read_packet(&mut stream).await else {
        return;
    };
    let auth_reply = if auth.body == PASSWORD { auth.id } else { -1 };
    let bytes = RconPacket::raw(auth_reply, packet_type::AUTH_RESPONSE, "").to_bytes();
    let _ = stream.write_all(&bytes).await;

    while let Some(packet) = read_packet(&mut stream).await {
        let reply = if packet.packet_type == packet_type::EXEC_COMMAND {
            reply_for(&packet.body)
        } else {
            format!("Unknown request {:x}", packet.packet_type)
        };
        let bytes = RconPacket::raw(packet.id, packet_type::RESPONSE_VALUE, reply).to_bytes();
        let _ = stream.write_all(&bytes).await;
    }
}

async fn spawn_game_server() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(serve_connection(stream));
        }
    });
    port
}

fn config(port: u16, password: &str) -> RconConfig {
    let mut config = RconConfig::new("127.0.0.1", port, password);
    config.connect_timeout = Duration::from_secs(2);
    config.response_timeout = Duration::from_secs(2);
    config
}

async fn post_whitelist_add(server: &AdminServer, player: &str) -> (StatusCode, ApiResponse) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/whitelist/add")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "player": player }).to_string()))
        .unwrap();

    let response = server.router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn whitelist_add_round_trip() {
    let port = spawn_game_server().await;
    let server = AdminServer::new(Console::rcon(config(port, PASSWORD)));

    let (status, envelope) = post_whitelist_add(&server, "Alex").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "code": 200,
            "message": "success",
            "data": "Added Alex to the whitelist",
            "error": null
        })
    );
}

#[tokio::test]
async fn wrong_password_yields_failure_envelope() {
    let port = spawn_game_server().await;
    let server = AdminServer::new(Console::rcon(config(port, "guess")));

    let (status, envelope) = post_whitelist_add(&server, "Alex").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.code, 500);
    assert!(!envelope.error.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn unreachable_server_yields_failure_envelope() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let server = AdminServer::new(Console::rcon(config(port, PASSWORD)));

    let (status, envelope) = post_whitelist_add(&server, "Alex").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.message, "error");
    assert!(!envelope.error.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn serves_over_tcp_until_shutdown() {
    let port = spawn_game_server().await;
    let server = AdminServer::new(Console::rcon(config(port, PASSWORD)));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let handle = tokio::spawn(server.serve(listener, async move {
        let _ = stop_rx.await;
    }));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "GET /api/v1/system/health HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
        addr
    );
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    assert!(response.starts_with("HTTP/1.1 200"), "got {}", response);
    assert!(response.contains("\"healthy\""));

    stop_tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server stops after shutdown signal")
        .unwrap()
        .unwrap();
}
