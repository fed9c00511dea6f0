//! Remote console connection settings

use crate::error::{AdminError, Result};
use std::time::Duration;

/// Placeholder password shipped as the default; must be overridden in real deployments
pub const PLACEHOLDER_PASSWORD: &str = "password";

/// Connection parameters for the remote console
#[derive(Debug, Clone)]
pub struct RconConfig {
    /// Remote console host
    pub host: String,
    /// Remote console port
    pub port: u16,
    /// Shared secret
    pub password: String,
    /// Deadline for establishing the TCP connection
    pub connect_timeout: Duration,
    /// Deadline for each request/response exchange
    pub response_timeout: Duration,
}

impl Default for RconConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 25575,
            password: PLACEHOLDER_PASSWORD.to_string(),
            connect_timeout: Duration::from_secs(5),
            response_timeout: Duration::from_secs(5),
        }
    }
}

impl RconConfig {
    /// Create config with custom endpoint settings and default timeouts
    pub fn new(host: impl Into<String>, port: u16, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            password: password.into(),
            ..Default::default()
        }
    }

    /// `host:port` as passed to the socket layer
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the password was left at its placeholder value
    pub fn uses_placeholder_password(&self) -> bool {
        self.password == PLACEHOLDER_PASSWORD
    }

    /// Reject settings that can never produce a working connection
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(AdminError::Config("RCON host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(AdminError::Config(
                "RCON port must be in 1..=65535".to_string(),
            ));
        }
        if self.connect_timeout.is_zero() || self.response_timeout.is_zero() {
            return Err(AdminError::Config(
                "RCON timeouts must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RconConfig::default();
        assert_eq!(config.address(), "localhost:25575");
        assert!(config.uses_placeholder_password());
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let mut config = RconConfig::new("mc.example.net", 0, "s3cret");
        assert!(matches!(config.validate(), Err(AdminError::Config(_))));

        config.port = 25575;
        config.host = "  ".to_string();
        assert!(config.validate().is_err());

        config.host = "mc.example.net".to_string();
        config.response_timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }
}
