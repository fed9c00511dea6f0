//! One-shot RCON client
//!
//! Every command opens its own connection, authenticates, runs exactly one
//! command and closes the connection before returning, whether the exchange
//! succeeded or not. No connection is shared between calls, so concurrent
//! callers each get an independent socket.

use crate::packet::MAX_COMMAND_LEN;
use crate::session::RconSession;
use async_trait::async_trait;
use mc_admin_core::{AdminError, CommandExecutor, RconConfig, Result};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// RCON client for a game server's remote console
#[derive(Debug, Clone)]
pub struct RconClient {
    config: Arc<RconConfig>,
}

impl RconClient {
    /// Create a new client; no connection is made until a command runs
    pub fn new(config: RconConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Connection settings in use
    pub fn config(&self) -> &RconConfig {
        &self.config
    }

    /// Connect, authenticate, run `command`, disconnect
    pub async fn execute(&self, command: &str) -> Result<String> {
        if command.len() > MAX_COMMAND_LEN {
            return Err(AdminError::Protocol(format!(
                "command is {} bytes, limit is {}",
                command.len(),
                MAX_COMMAND_LEN
            )));
        }

        let stream = self.connect().await?;
        let mut session = RconSession::new(stream);
        let result = self.exchange(&mut session, command).await;
        session.close().await;
        debug!("RCON disconnected from {}", self.config.address());

        result
    }

    async fn connect(&self) -> Result<TcpStream> {
        let address = self.config.address();
        debug!("Connecting to RCON at {}", address);

        match timeout(self.config.connect_timeout, TcpStream::connect(&address)).await {
            Ok(Ok(stream)) => Ok(stream),
            Ok(Err(e)) => Err(AdminError::Connect {
                address,
                reason: e.to_string(),
            }),
            Err(_) => Err(AdminError::Timeout(format!(
                "connecting to {} took longer than {:?}",
                address, self.config.connect_timeout
            ))),
        }
    }

    async fn exchange<S>(&self, session: &mut RconSession<S>, command: &str) -> Result<String>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send,
    {
        let deadline = self.config.response_timeout;

        timeout(deadline, session.authenticate(&self.config.password))
            .await
            .map_err(|_| {
                AdminError::Timeout(format!("no auth response within {:?}", deadline))
            })??;

        debug!("RCON exec: {}", command);
        let response = timeout(deadline, session.exec(command))
            .await
            .map_err(|_| {
                AdminError::Timeout(format!("no command response within {:?}", deadline))
            })??;

        let preview: String = response.chars().take(100).collect();
        debug!("RCON response: {}", preview);
        Ok(response)
    }
}

#[async_trait]
impl CommandExecutor for RconClient {
    async fn execute(&self, command: &str) -> Result<String> {
        RconClient::execute(self, command).await
    }
}
