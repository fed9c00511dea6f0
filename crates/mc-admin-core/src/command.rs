//! Console command templates
//!
//! Every administrative action maps to exactly one command line: a verb
//! followed by positional arguments joined with single spaces. Argument
//! values are passed through unvalidated; the game server decides whether
//! a mode, weather kind or difficulty name is acceptable.

use std::fmt::{self, Display};

/// Builds a single space-separated command line
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    line: String,
}

impl CommandBuilder {
    /// Start a command with its verb (e.g. `give`, `whitelist add`)
    pub fn new(verb: &str) -> Self {
        Self {
            line: verb.to_string(),
        }
    }

    /// Append a positional argument
    pub fn arg(mut self, value: impl Display) -> Self {
        self.line.push(' ');
        self.line.push_str(&value.to_string());
        self
    }

    /// Append an argument only when present
    pub fn opt_arg(self, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.arg(value),
            None => self,
        }
    }

    /// Append a coordinate or angle
    pub fn coord(self, value: f64) -> Self {
        self.arg(Coordinate(value))
    }

    /// Finish the command line
    pub fn build(self) -> String {
        self.line
    }
}

/// Renders integral values with a trailing `.0`.
///
/// The game centres integral x/z coordinates on the block, so `10` and
/// `10.0` teleport to different places.
struct Coordinate(f64);

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Treat empty optional text the same as absent
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ---- Players ----

pub fn list_players() -> String {
    CommandBuilder::new("list").build()
}

pub fn say(message: &str) -> String {
    CommandBuilder::new("say").arg(message).build()
}

/// Broadcast under a custom sender name via a JSON text component
pub fn tellraw_all(sender: &str, message: &str) -> String {
    let component = serde_json::json!({ "text": format!("<{}> {}", sender, message) });
    CommandBuilder::new("tellraw @a").arg(component).build()
}

pub fn tell(player: &str, message: &str) -> String {
    CommandBuilder::new("tell").arg(player).arg(message).build()
}

pub fn kick(player: &str, reason: Option<&str>) -> String {
    CommandBuilder::new("kick")
        .arg(player)
        .opt_arg(non_empty(reason))
        .build()
}

pub fn ban(player: &str, reason: Option<&str>) -> String {
    CommandBuilder::new("ban")
        .arg(player)
        .opt_arg(non_empty(reason))
        .build()
}

pub fn pardon(player: &str) -> String {
    CommandBuilder::new("pardon").arg(player).build()
}

pub fn ban_ip(ip: &str) -> String {
    CommandBuilder::new("ban-ip").arg(ip).build()
}

pub fn pardon_ip(ip: &str) -> String {
    CommandBuilder::new("pardon-ip").arg(ip).build()
}

pub fn set_game_mode(player: &str, mode: &str) -> String {
    CommandBuilder::new("gamemode").arg(mode).arg(player).build()
}

// ---- Items ----

pub fn give(player: &str, item: &str, count: u32, data: i32) -> String {
    CommandBuilder::new("give")
        .arg(player)
        .arg(item)
        .arg(count)
        .arg(data)
        .build()
}

/// Clear a whole inventory, or one item type (optionally capped at `count`)
pub fn clear(player: &str, item: Option<&str>, count: Option<i32>) -> String {
    let builder = CommandBuilder::new("clear").arg(player);
    match non_empty(item) {
        Some(item) => builder.arg(item).opt_arg(count).build(),
        None => builder.build(),
    }
}

// ---- Teleport ----

pub fn teleport(player: &str, target: &str) -> String {
    CommandBuilder::new("tp").arg(player).arg(target).build()
}

pub fn teleport_to_coordinates(player: &str, x: f64, y: f64, z: f64) -> String {
    CommandBuilder::new("tp")
        .arg(player)
        .coord(x)
        .coord(y)
        .coord(z)
        .build()
}

pub fn teleport_with_rotation(
    player: &str,
    x: f64,
    y: f64,
    z: f64,
    yaw: f64,
    pitch: f64,
) -> String {
    CommandBuilder::new("tp")
        .arg(player)
        .coord(x)
        .coord(y)
        .coord(z)
        .coord(yaw)
        .coord(pitch)
        .build()
}

// ---- World ----

pub fn set_time(time: &str) -> String {
    CommandBuilder::new("time set").arg(time).build()
}

pub fn add_time(ticks: i64) -> String {
    CommandBuilder::new("time add").arg(ticks).build()
}

/// Duration is only sent when positive; otherwise the server default applies
pub fn set_weather(weather: &str, duration: Option<i64>) -> String {
    CommandBuilder::new("weather")
        .arg(weather)
        .opt_arg(duration.filter(|d| *d > 0))
        .build()
}

pub fn set_difficulty(difficulty: &str) -> String {
    CommandBuilder::new("difficulty").arg(difficulty).build()
}

// ---- Server ----

pub fn save_all() -> String {
    CommandBuilder::new("save-all").build()
}

pub fn save_on() -> String {
    CommandBuilder::new("save-on").build()
}

pub fn save_off() -> String {
    CommandBuilder::new("save-off").build()
}

pub fn stop() -> String {
    CommandBuilder::new("stop").build()
}

// ---- Whitelist ----

pub fn whitelist_add(player: &str) -> String {
    CommandBuilder::new("whitelist add").arg(player).build()
}

pub fn whitelist_remove(player: &str) -> String {
    CommandBuilder::new("whitelist remove").arg(player).build()
}

pub fn whitelist_list() -> String {
    CommandBuilder::new("whitelist list").build()
}

pub fn whitelist_reload() -> String {
    CommandBuilder::new("whitelist reload").build()
}

pub fn whitelist_on() -> String {
    CommandBuilder::new("whitelist on").build()
}

pub fn whitelist_off() -> String {
    CommandBuilder::new("whitelist off").build()
}
