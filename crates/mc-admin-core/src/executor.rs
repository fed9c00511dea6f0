//! Command executor trait

use crate::error::Result;
use async_trait::async_trait;

/// Something that can run one console command and return its raw text output.
///
/// The RCON client is the production implementation; tests substitute
/// recording executors.
#[async_trait]
pub trait CommandExecutor: Send + Sync + 'static {
    /// Execute a single command line
    async fn execute(&self, command: &str) -> Result<String>;
}
