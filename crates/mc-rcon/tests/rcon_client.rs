//! Integration tests: drive `RconClient` against an in-process fake RCON server.

use mc_admin_core::{AdminError, RconConfig};
use mc_rcon::packet::{AUTH_FAILED_ID, packet_type};
use mc_rcon::{Console, RconClient, RconPacket};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::time::timeout;

const PASSWORD: &str = "s3cret";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Behavior {
    /// Reply `Echo: <command>` to every command
    Echo,
    /// Authenticate, then never answer commands
    Silent,
    /// Reply with `unit` repeated `times`, split the way vanilla servers do
    Long { unit: &'static str, times: usize },
}

/// Characters per response packet on a vanilla server
const CHUNK_CHARS: usize = 4096;

#[derive(Debug, PartialEq)]
enum Event {
    Accepted,
    Command(String),
    Closed,
}

async fn read_packet(stream: &mut TcpStream) -> Option<RconPacket> {
    let mut size_buf = [0u8; 4];
    stream.read_exact(&mut size_buf).await.ok()?;
    let size = i32::from_le_bytes(size_buf) as usize;
    let mut data = vec![0u8; size];
    stream.read_exact(&mut data).await.ok()?;
    RconPacket::from_bytes(&data).ok()
}

async fn write_packet(stream: &mut TcpStream, id: i32, packet_type: i32, body: &str) {
    let bytes = RconPacket::raw(id, packet_type, body).to_bytes();
    let _ = stream.write_all(&bytes).await;
}

async fn handle(mut stream: TcpStream, behavior: Behavior, events: mpsc::UnboundedSender<Event>) {
    let _ = events.send(Event::Accepted);

    if let Some(auth) = read_packet(&mut stream).await {
        if auth.body == PASSWORD {
            write_packet(&mut stream, auth.id, packet_type::AUTH_RESPONSE, "").await;
        } else {
            write_packet(&mut stream, AUTH_FAILED_ID, packet_type::AUTH_RESPONSE, "").await;
        }
    }

    while let Some(packet) = read_packet(&mut stream).await {
        if packet.packet_type != packet_type::EXEC_COMMAND {
            if behavior != Behavior::Silent {
                let reply = format!("Unknown request {:x}", packet.packet_type);
                write_packet(&mut stream, packet.id, packet_type::RESPONSE_VALUE, &reply).await;
            }
            continue;
        }

        let _ = events.send(Event::Command(packet.body.clone()));
        match behavior {
            Behavior::Echo => {
                let reply = format!("Echo: {}", packet.body);
                write_packet(&mut stream, packet.id, packet_type::RESPONSE_VALUE, &reply).await;
            }
            Behavior::Long { unit, times } => {
                let chars: Vec<char> = unit.repeat(times).chars().collect();
                for chunk in chars.chunks(CHUNK_CHARS) {
                    let chunk: String = chunk.iter().collect();
                    write_packet(&mut stream, packet.id, packet_type::RESPONSE_VALUE, &chunk).await;
                }
            }
            Behavior::Silent => {}
        }
    }

    let _ = events.send(Event::Closed);
}

async fn spawn_server(behavior: Behavior) -> (SocketAddr, mpsc::UnboundedReceiver<Event>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(handle(stream, behavior, tx.clone()));
        }
    });

    (addr, rx)
}

fn client_for(addr: SocketAddr, password: &str) -> RconClient {
    let mut config = RconConfig::new("127.0.0.1", addr.port(), password);
    config.connect_timeout = Duration::from_secs(2);
    config.response_timeout = Duration::from_millis(300);
    RconClient::new(config)
}

async fn next_event(rx: &mut mpsc::UnboundedReceiver<Event>) -> Event {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("server event within 2s")
        .expect("server still running")
}

#[tokio::test]
async fn executes_one_command_per_connection() {
    let (addr, mut events) = spawn_server(Behavior::Echo).await;
    let client = client_for(addr, PASSWORD);

    let reply = client.execute("whitelist add Alex").await.unwrap();
    assert_eq!(reply, "Echo: whitelist add Alex");

    assert_eq!(next_event(&mut events).await, Event::Accepted);
    assert_eq!(
        next_event(&mut events).await,
        Event::Command("whitelist add Alex".to_string())
    );
    assert_eq!(next_event(&mut events).await, Event::Closed);
}

#[tokio::test]
async fn rejected_password_still_closes_connection() {
    let (addr, mut events) = spawn_server(Behavior::Echo).await;
    let client = client_for(addr, "not-the-password");

    let err = client.execute("list").await.unwrap_err();
    assert!(matches!(err, AdminError::AuthRejected), "got {:?}", err);

    assert_eq!(next_event(&mut events).await, Event::Accepted);
    assert_eq!(next_event(&mut events).await, Event::Closed);
}

#[tokio::test]
async fn silent_server_times_out() {
    let (addr, mut events) = spawn_server(Behavior::Silent).await;
    let client = client_for(addr, PASSWORD);

    let err = client.execute("save-all").await.unwrap_err();
    assert!(matches!(err, AdminError::Timeout(_)), "got {:?}", err);

    assert_eq!(next_event(&mut events).await, Event::Accepted);
    assert_eq!(
        next_event(&mut events).await,
        Event::Command("save-all".to_string())
    );
    assert_eq!(next_event(&mut events).await, Event::Closed);
}

#[tokio::test]
async fn repeated_failures_do_not_leak_connections() {
    let (addr, mut events) = spawn_server(Behavior::Echo).await;
    let client = client_for(addr, "wrong");

    for _ in 0..3 {
        assert!(client.execute("list").await.is_err());
    }

    let mut accepted = 0;
    let mut closed = 0;
    while closed < 3 {
        match next_event(&mut events).await {
            Event::Accepted => accepted += 1,
            Event::Closed => closed += 1,
            Event::Command(cmd) => panic!("unexpected command after failed auth: {}", cmd),
        }
    }
    assert_eq!(accepted, 3);
}

#[tokio::test]
async fn concurrent_calls_use_independent_connections() {
    let (addr, _events) = spawn_server(Behavior::Echo).await;
    let console = Console::rcon(client_for(addr, PASSWORD).config().clone());

    let (a, b, c) = tokio::join!(
        console.tell("Steve", "hello"),
        console.set_time("day"),
        console.give_item("Alex", "apple", 3, 0),
    );

    assert_eq!(a.unwrap(), "Echo: tell Steve hello");
    assert_eq!(b.unwrap(), "Echo: time set day");
    assert_eq!(c.unwrap(), "Echo: give Alex apple 3 0");
}

#[tokio::test]
async fn multibyte_reply_in_one_packet() {
    // 3000 characters, 4500 bytes once encoded
    let (addr, _events) = spawn_server(Behavior::Long { unit: "§a", times: 1500 }).await;
    let client = client_for(addr, PASSWORD);

    let reply = client.execute("list").await.unwrap();
    assert_eq!(reply.chars().count(), 3000);
    assert_eq!(reply, "§a".repeat(1500));
}

#[tokio::test]
async fn reply_split_over_packets_is_returned_whole() {
    let (addr, mut events) = spawn_server(Behavior::Long { unit: "x", times: 6000 }).await;
    let client = client_for(addr, PASSWORD);

    let reply = client.execute("whitelist list").await.unwrap();
    assert_eq!(reply.len(), 6000);

    assert_eq!(next_event(&mut events).await, Event::Accepted);
    assert_eq!(
        next_event(&mut events).await,
        Event::Command("whitelist list".to_string())
    );
    assert_eq!(next_event(&mut events).await, Event::Closed);
}
