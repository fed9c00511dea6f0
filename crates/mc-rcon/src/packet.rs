//! RCON packet framing
//!
//! Protocol reference: https://developer.valvesoftware.com/wiki/Source_RCON_Protocol
//!
//! `size:i32 | id:i32 | type:i32 | body | 0x00 | 0x00`, all little endian,
//! where `size` counts every byte after itself.

use mc_admin_core::{AdminError, Result};

/// RCON packet type constants
pub mod packet_type {
    /// Command output from the server
    pub const RESPONSE_VALUE: i32 = 0;
    /// Authentication response (shares its value with EXEC_COMMAND)
    pub const AUTH_RESPONSE: i32 = 2;
    /// Execute a command
    pub const EXEC_COMMAND: i32 = 2;
    /// Authenticate with password
    pub const AUTH: i32 = 3;
}

/// Bytes in a packet besides the body: id(4) + type(4) + two nulls
pub const HEADER_SIZE: usize = 10;

/// Characters a server puts in a single response packet before splitting
pub const MAX_RESPONSE_BODY: usize = 4096;

/// Largest `size` accepted from the wire.
///
/// Servers split output by characters and encode each chunk as UTF-8,
/// so one chunk can take up to three bytes per character.
pub const MAX_PACKET_SIZE: usize = HEADER_SIZE + 3 * MAX_RESPONSE_BODY;

/// Largest command body Minecraft servers accept
pub const MAX_COMMAND_LEN: usize = 1446;

/// Response id the server uses to signal a rejected password
pub const AUTH_FAILED_ID: i32 = -1;

/// Client-sent packet kinds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PacketType {
    /// Execute a command
    ExecCommand,
    /// Authenticate with password
    Auth,
}

impl PacketType {
    /// Get the wire protocol value
    pub fn as_i32(self) -> i32 {
        match self {
            PacketType::ExecCommand => packet_type::EXEC_COMMAND,
            PacketType::Auth => packet_type::AUTH,
        }
    }
}

/// A single RCON packet
#[derive(Debug, Clone, PartialEq)]
pub struct RconPacket {
    pub id: i32,
    pub packet_type: i32,
    pub body: String,
}

impl RconPacket {
    /// Create a new client packet
    pub fn new(id: i32, packet_type: PacketType, body: impl Into<String>) -> Self {
        Self {
            id,
            packet_type: packet_type.as_i32(),
            body: body.into(),
        }
    }

    /// Create a packet with a raw type value (server-side packets)
    pub fn raw(id: i32, packet_type: i32, body: impl Into<String>) -> Self {
        Self {
            id,
            packet_type,
            body: body.into(),
        }
    }

    /// Value of the `size` field for this packet
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.body.len()
    }

    /// Serialize packet to bytes, size prefix included
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = self.wire_size();
        let mut buf = Vec::with_capacity(4 + size);
        for field in [size as i32, self.id, self.packet_type] {
            buf.extend_from_slice(&field.to_le_bytes());
        }
        buf.extend_from_slice(self.body.as_bytes());
        buf.extend_from_slice(&[0, 0]);
        buf
    }

    /// Validate a size prefix before reading the rest of the packet
    pub fn check_size(size: i32) -> Result<usize> {
        match usize::try_from(size) {
            Ok(len) if (HEADER_SIZE..=MAX_PACKET_SIZE).contains(&len) => Ok(len),
            _ => Err(size_error(size)),
        }
    }

    /// Parse the bytes following the size prefix
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if !(HEADER_SIZE..=MAX_PACKET_SIZE).contains(&data.len()) {
            return Err(size_error(data.len()));
        }

        let (id, rest) = split_i32(data).ok_or_else(|| size_error(data.len()))?;
        let (packet_type, payload) = split_i32(rest).ok_or_else(|| size_error(data.len()))?;

        // Body runs until the first null
        let body = payload.split(|&b| b == 0).next().unwrap_or_default();

        Ok(Self {
            id,
            packet_type,
            body: String::from_utf8_lossy(body).into_owned(),
        })
    }
}

fn split_i32(data: &[u8]) -> Option<(i32, &[u8])> {
    let (head, rest) = data.split_first_chunk::<4>()?;
    Some((i32::from_le_bytes(*head), rest))
}

fn size_error(size: impl std::fmt::Display) -> AdminError {
    AdminError::Protocol(format!("RCON packet size out of range: {} bytes", size))
}
