//! Request bodies
//!
//! Names, items, messages and keywords become positional command arguments,
//! so blank values are rejected while deserializing.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::fmt;
use std::num::NonZeroU32;

fn non_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.trim().is_empty() {
        return Err(de::Error::invalid_value(
            de::Unexpected::Str(&value),
            &"a non-blank string",
        ));
    }
    Ok(value)
}

#[derive(Debug, Deserialize)]
pub struct BroadcastMessage {
    #[serde(deserialize_with = "non_blank")]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CustomBroadcastMessage {
    #[serde(deserialize_with = "non_blank")]
    pub sender: String,
    #[serde(deserialize_with = "non_blank")]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct PrivateMessage {
    #[serde(deserialize_with = "non_blank")]
    pub player: String,
    #[serde(deserialize_with = "non_blank")]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GiveItem {
    #[serde(deserialize_with = "non_blank")]
    pub player: String,
    #[serde(deserialize_with = "non_blank")]
    pub item: String,
    #[serde(default = "default_count")]
    pub count: NonZeroU32,
    #[serde(default)]
    pub data: i32,
}

fn default_count() -> NonZeroU32 {
    NonZeroU32::MIN
}

#[derive(Debug, Deserialize)]
pub struct ClearInventory {
    #[serde(deserialize_with = "non_blank")]
    pub player: String,
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub count: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct Teleport {
    #[serde(deserialize_with = "non_blank")]
    pub player: String,
    #[serde(deserialize_with = "non_blank")]
    pub target: String,
}

/// Rotation is applied only when both `yaw` and `pitch` are given
#[derive(Debug, Deserialize)]
pub struct TeleportCoordinates {
    #[serde(deserialize_with = "non_blank")]
    pub player: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub yaw: Option<f64>,
    #[serde(default)]
    pub pitch: Option<f64>,
}

/// Time of day as a keyword (`day`, `midnight`) or a tick count
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TimeOfDay {
    Ticks(i64),
    Keyword(String),
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Ticks(ticks) => write!(f, "{}", ticks),
            TimeOfDay::Keyword(keyword) => f.write_str(keyword),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TimeSetting {
    pub time: TimeOfDay,
}

#[derive(Debug, Deserialize)]
pub struct AddTime {
    pub time: i64,
}

#[derive(Debug, Deserialize)]
pub struct WeatherSetting {
    #[serde(deserialize_with = "non_blank")]
    pub weather: String,
    #[serde(default)]
    pub duration: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DifficultySetting {
    #[serde(deserialize_with = "non_blank")]
    pub difficulty: String,
}

#[derive(Debug, Deserialize)]
pub struct GameModeSetting {
    #[serde(deserialize_with = "non_blank")]
    pub player: String,
    #[serde(deserialize_with = "non_blank")]
    pub mode: String,
}

#[derive(Debug, Deserialize)]
pub struct KickBanPlayer {
    #[serde(deserialize_with = "non_blank")]
    pub player: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Body for whitelist edits and pardons
#[derive(Debug, Deserialize)]
pub struct PlayerAction {
    #[serde(deserialize_with = "non_blank")]
    pub player: String,
}

#[derive(Debug, Deserialize)]
pub struct IpAction {
    #[serde(deserialize_with = "non_blank")]
    pub ip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_give_defaults() {
        let give: GiveItem = serde_json::from_str(r#"{"player":"Steve","item":"diamond"}"#).unwrap();
        assert_eq!(give.count.get(), 1);
        assert_eq!(give.data, 0);
    }

    #[test]
    fn test_time_accepts_keyword_or_ticks() {
        let keyword: TimeSetting = serde_json::from_str(r#"{"time":"night"}"#).unwrap();
        assert_eq!(keyword.time.to_string(), "night");

        let ticks: TimeSetting = serde_json::from_str(r#"{"time":6000}"#).unwrap();
        assert_eq!(ticks.time.to_string(), "6000");
    }

    #[test]
    fn test_negative_count_rejected() {
        let result: Result<GiveItem, _> =
            serde_json::from_str(r#"{"player":"Steve","item":"diamond","count":-2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_count_rejected() {
        let result: Result<GiveItem, _> =
            serde_json::from_str(r#"{"player":"Steve","item":"diamond","count":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_names_rejected() {
        let empty: Result<GiveItem, _> = serde_json::from_str(r#"{"player":"","item":"diamond"}"#);
        assert!(empty.is_err());

        let spaces: Result<PlayerAction, _> = serde_json::from_str(r#"{"player":"   "}"#);
        assert!(spaces.is_err());

        let ok: PlayerAction = serde_json::from_str(r#"{"player":"Alex"}"#).unwrap();
        assert_eq!(ok.player, "Alex");
    }
}
