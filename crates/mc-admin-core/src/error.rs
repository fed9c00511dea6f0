//! Error types for mc-admin

use thiserror::Error;

/// Result type for mc-admin operations
pub type Result<T> = std::result::Result<T, AdminError>;

/// mc-admin error types
#[derive(Debug, Error)]
pub enum AdminError {
    /// TCP connection to the remote console could not be established
    #[error("RCON connect to {address} failed: {reason}")]
    Connect { address: String, reason: String },

    /// Connect or response deadline elapsed
    #[error("RCON timeout: {0}")]
    Timeout(String),

    /// Remote console rejected the password
    #[error("RCON authentication rejected")]
    AuthRejected,

    /// Read/write failure on an established connection
    #[error("RCON I/O error: {0}")]
    Io(String),

    /// Malformed or unexpected packet
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registry lookup miss
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AdminError {
    /// Whether this error is a registry miss rather than a generic failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, AdminError::NotFound(_))
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Serialization(err.to_string())
    }
}
