//! Remote console bridge for mc-admin
//!
//! Provides communication with a game server's remote console (the Source
//! RCON protocol family, as spoken by Minecraft servers):
//!
//! - **Wire format**: little-endian length-prefixed packets (`packet`)
//! - **Session**: authenticate, then exchange one command (`session`)
//! - **Client**: one connection per command, with explicit timeouts (`client`)
//! - **Console**: typed administrative actions on top of any executor (`console`)

mod client;
mod console;
pub mod packet;
mod session;

pub use client::RconClient;
pub use console::Console;
pub use packet::{PacketType, RconPacket};
pub use session::RconSession;
