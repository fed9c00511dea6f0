//! Authenticated exchange over a single stream

use crate::packet::{AUTH_FAILED_ID, PacketType, RconPacket, packet_type};
use mc_admin_core::{AdminError, Result};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// One RCON conversation: authenticate, run commands, close.
///
/// Generic over the stream so the packet exchange can be driven by
/// something other than a TCP socket.
pub struct RconSession<S> {
    stream: S,
    next_id: i32,
}

impl<S> RconSession<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    /// Wrap a freshly connected stream
    pub fn new(stream: S) -> Self {
        Self { stream, next_id: 1 }
    }

    fn next_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Send the password and wait for the server's verdict
    pub async fn authenticate(&mut self, password: &str) -> Result<()> {
        let auth_id = self.next_id();
        let auth_packet = RconPacket::new(auth_id, PacketType::Auth, password);
        self.send_packet(&auth_packet).await?;

        let mut response = self.recv_packet().await?;

        // Source-engine servers send an empty RESPONSE_VALUE ahead of the verdict
        if response.packet_type == packet_type::RESPONSE_VALUE && response.id != AUTH_FAILED_ID {
            debug!("Skipping empty response preceding auth response");
            response = self.recv_packet().await?;
        }

        if response.id == AUTH_FAILED_ID {
            return Err(AdminError::AuthRejected);
        }

        if response.packet_type != packet_type::AUTH_RESPONSE {
            return Err(AdminError::Protocol(format!(
                "expected auth response, got packet type {}",
                response.packet_type
            )));
        }

        if response.id != auth_id {
            warn!(
                "RCON auth response ID mismatch: expected {}, got {}",
                auth_id, response.id
            );
        }

        Ok(())
    }

    /// Send one command and collect its full response.
    ///
    /// Long output arrives split over several packets with no end marker,
    /// so an empty RESPONSE_VALUE packet follows the command. Servers answer
    /// in order; the reply to that packet ends the command's output.
    pub async fn exec(&mut self, command: &str) -> Result<String> {
        let cmd_id = self.next_id();
        self.send_packet(&RconPacket::new(cmd_id, PacketType::ExecCommand, command))
            .await?;
        let end_id = self.next_id();
        self.send_packet(&RconPacket::raw(end_id, packet_type::RESPONSE_VALUE, ""))
            .await?;

        let mut body = String::new();
        let mut packets = 0;
        loop {
            let response = self.recv_packet().await?;
            if response.id == end_id {
                break;
            }
            if response.id != cmd_id {
                debug!(
                    "Response ID mismatch: expected {}, got {}",
                    cmd_id, response.id
                );
            }
            body.push_str(&response.body);
            packets += 1;
        }

        if packets > 1 {
            debug!("Joined {} response packets ({} bytes)", packets, body.len());
        }
        Ok(body)
    }

    /// Shut the stream down; errors are irrelevant at this point
    pub async fn close(mut self) {
        let _ = self.stream.shutdown().await;
    }

    async fn send_packet(&mut self, packet: &RconPacket) -> Result<()> {
        let bytes = packet.to_bytes();
        self.stream
            .write_all(&bytes)
            .await
            .map_err(|e| AdminError::Io(format!("RCON send failed: {}", e)))?;
        self.stream
            .flush()
            .await
            .map_err(|e| AdminError::Io(format!("RCON flush failed: {}", e)))?;
        Ok(())
    }

    async fn recv_packet(&mut self) -> Result<RconPacket> {
        // Read size (4 bytes, little endian)
        let mut size_buf = [0u8; 4];
        self.stream
            .read_exact(&mut size_buf)
            .await
            .map_err(|e| AdminError::Io(format!("RCON recv size failed: {}", e)))?;
        let size = RconPacket::check_size(i32::from_le_bytes(size_buf))?;

        let mut data = vec![0u8; size];
        self.stream
            .read_exact(&mut data)
            .await
            .map_err(|e| AdminError::Io(format!("RCON recv body failed: {}", e)))?;

        RconPacket::from_bytes(&data)
    }
}
