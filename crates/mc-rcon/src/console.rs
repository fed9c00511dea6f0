//! Typed administrative actions
//!
//! Each method formats one command via `mc_admin_core::command` and hands it
//! to the executor. The raw response text is returned unchanged.

use crate::client::RconClient;
use mc_admin_core::{CommandExecutor, RconConfig, Result, command};
use std::sync::Arc;
use tracing::warn;

/// Game-server console backed by any command executor
#[derive(Clone)]
pub struct Console {
    executor: Arc<dyn CommandExecutor>,
}

impl Console {
    /// Create a console over an arbitrary executor
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }

    /// Create a console that talks RCON with the given settings
    pub fn rcon(config: RconConfig) -> Self {
        Self::new(Arc::new(RconClient::new(config)))
    }

    async fn run(&self, command: String) -> Result<String> {
        self.executor.execute(&command).await.inspect_err(|e| {
            warn!("Console command '{}' failed: {}", command, e);
        })
    }

    // ---- Players ----

    pub async fn list_players(&self) -> Result<String> {
        self.run(command::list_players()).await
    }

    pub async fn broadcast(&self, message: &str) -> Result<String> {
        self.run(command::say(message)).await
    }

    pub async fn custom_broadcast(&self, sender: &str, message: &str) -> Result<String> {
        self.run(command::tellraw_all(sender, message)).await
    }

    pub async fn tell(&self, player: &str, message: &str) -> Result<String> {
        self.run(command::tell(player, message)).await
    }

    pub async fn kick(&self, player: &str, reason: Option<&str>) -> Result<String> {
        self.run(command::kick(player, reason)).await
    }

    pub async fn ban(&self, player: &str, reason: Option<&str>) -> Result<String> {
        self.run(command::ban(player, reason)).await
    }

    pub async fn pardon(&self, player: &str) -> Result<String> {
        self.run(command::pardon(player)).await
    }

    pub async fn ban_ip(&self, ip: &str) -> Result<String> {
        self.run(command::ban_ip(ip)).await
    }

    pub async fn pardon_ip(&self, ip: &str) -> Result<String> {
        self.run(command::pardon_ip(ip)).await
    }

    pub async fn set_game_mode(&self, player: &str, mode: &str) -> Result<String> {
        self.run(command::set_game_mode(player, mode)).await
    }

    // ---- Items ----

    pub async fn give_item(&self, player: &str, item: &str, count: u32, data: i32) -> Result<String> {
        self.run(command::give(player, item, count, data)).await
    }

    pub async fn clear_inventory(
        &self,
        player: &str,
        item: Option<&str>,
        count: Option<i32>,
    ) -> Result<String> {
        self.run(command::clear(player, item, count)).await
    }

    // ---- Teleport ----

    pub async fn teleport(&self, player: &str, target: &str) -> Result<String> {
        self.run(command::teleport(player, target)).await
    }

    pub async fn teleport_to_coordinates(
        &self,
        player: &str,
        x: f64,
        y: f64,
        z: f64,
    ) -> Result<String> {
        self.run(command::teleport_to_coordinates(player, x, y, z))
            .await
    }

    pub async fn teleport_with_rotation(
        &self,
        player: &str,
        x: f64,
        y: f64,
        z: f64,
        yaw: f64,
        pitch: f64,
    ) -> Result<String> {
        self.run(command::teleport_with_rotation(player, x, y, z, yaw, pitch))
            .await
    }

    // ---- World ----

    pub async fn set_time(&self, time: &str) -> Result<String> {
        self.run(command::set_time(time)).await
    }

    pub async fn add_time(&self, ticks: i64) -> Result<String> {
        self.run(command::add_time(ticks)).await
    }

    pub async fn set_weather(&self, weather: &str, duration: Option<i64>) -> Result<String> {
        self.run(command::set_weather(weather, duration)).await
    }

    pub async fn set_difficulty(&self, difficulty: &str) -> Result<String> {
        self.run(command::set_difficulty(difficulty)).await
    }

    // ---- Server ----

    pub async fn save_all(&self) -> Result<String> {
        self.run(command::save_all()).await
    }

    pub async fn save_on(&self) -> Result<String> {
        self.run(command::save_on()).await
    }

    pub async fn save_off(&self) -> Result<String> {
        self.run(command::save_off()).await
    }

    pub async fn stop_server(&self) -> Result<String> {
        self.run(command::stop()).await
    }

    // ---- Whitelist ----

    pub async fn whitelist_add(&self, player: &str) -> Result<String> {
        self.run(command::whitelist_add(player)).await
    }

    pub async fn whitelist_remove(&self, player: &str) -> Result<String> {
        self.run(command::whitelist_remove(player)).await
    }

    pub async fn whitelist_list(&self) -> Result<String> {
        self.run(command::whitelist_list()).await
    }

    pub async fn whitelist_reload(&self) -> Result<String> {
        self.run(command::whitelist_reload()).await
    }

    pub async fn whitelist_on(&self) -> Result<String> {
        self.run(command::whitelist_on()).await
    }

    pub async fn whitelist_off(&self) -> Result<String> {
        self.run(command::whitelist_off()).await
    }
}
