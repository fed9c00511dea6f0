//! # mc-admin-server
//!
//! HTTP boundary for administering a game server over its remote console.
//!
//! This crate provides:
//! - Console routes (players, world, whitelist, server lifecycle)
//! - Task and node registries
//! - The uniform `{code, message, data, error}` response envelope

pub mod envelope;
pub mod models;
pub mod registry;
pub mod routes;

pub use envelope::{ApiResponse, Payload};
pub use registry::{NodeRegistry, TaskRegistry};

use axum::Router;
use mc_admin_core::{AdminError, Result};
use mc_rcon::Console;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::info;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// Typed game-server console
    pub console: Console,
    /// Task registry
    pub tasks: Arc<RwLock<TaskRegistry>>,
    /// Node registry
    pub nodes: Arc<RwLock<NodeRegistry>>,
}

impl AppState {
    /// State with an empty task registry and the stock node set
    pub fn new(console: Console) -> Self {
        Self {
            console,
            tasks: Arc::new(RwLock::new(TaskRegistry::new())),
            nodes: Arc::new(RwLock::new(NodeRegistry::seeded())),
        }
    }
}

/// mc-admin HTTP server
pub struct AdminServer {
    state: AppState,
}

impl AdminServer {
    /// Create a new server around the given console
    pub fn new(console: Console) -> Self {
        Self::with_state(AppState::new(console))
    }

    /// Create a server with explicit state
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    /// Build the axum router
    pub fn router(&self) -> Router {
        routes::router(self.state.clone())
    }

    /// Serve on `listener` until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener
            .local_addr()
            .map_err(|e| AdminError::Io(e.to_string()))?;
        info!("mc-admin listening on http://{}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| AdminError::Io(format!("HTTP server failed: {}", e)))?;

        info!("mc-admin stopped");
        Ok(())
    }
}
