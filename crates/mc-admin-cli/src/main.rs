//! mc-admin HTTP server
//!
//! Exposes game-server administration over HTTP and forwards every action
//! to the server's remote console:
//! - Players, world, whitelist and lifecycle routes under /api/v1
//! - RCON endpoint from RCON_HOST / RCON_PORT / RCON_PASSWORD
//! - Listens on MC_ADMIN_BIND:MC_ADMIN_PORT (default 127.0.0.1:5000)

use anyhow::{Context, Result};
use clap::Parser;
use mc_admin_core::RconConfig;
use mc_admin_server::AdminServer;
use mc_rcon::Console;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "mc-admin", version, about = "Game-server administration over RCON")]
struct Args {
    /// Remote console host
    #[arg(long, env = "RCON_HOST", default_value = "localhost")]
    rcon_host: String,

    /// Remote console port
    #[arg(
        long,
        env = "RCON_PORT",
        default_value_t = 25575,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    rcon_port: u16,

    /// Remote console password
    #[arg(long, env = "RCON_PASSWORD", default_value = "password", hide_env_values = true)]
    rcon_password: String,

    /// Seconds allowed for the TCP connect
    #[arg(long, env = "RCON_CONNECT_TIMEOUT", default_value_t = 5)]
    connect_timeout: u64,

    /// Seconds allowed for each RCON response
    #[arg(long, env = "RCON_RESPONSE_TIMEOUT", default_value_t = 5)]
    response_timeout: u64,

    /// HTTP bind address
    #[arg(long, env = "MC_ADMIN_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// HTTP port
    #[arg(long, short, env = "MC_ADMIN_PORT", default_value_t = 5000)]
    port: u16,
}

impl Args {
    fn rcon_config(&self) -> RconConfig {
        RconConfig {
            host: self.rcon_host.clone(),
            port: self.rcon_port,
            password: self.rcon_password.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout),
            response_timeout: Duration::from_secs(self.response_timeout),
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = args.rcon_config();
    config.validate()?;
    if config.uses_placeholder_password() {
        warn!("RCON_PASSWORD is the placeholder default; set a real password");
    }
    info!("Forwarding commands to RCON at {}", config.address());

    let server = AdminServer::new(Console::rcon(config));

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    server.serve(listener, shutdown_signal()).await?;
    Ok(())
}
