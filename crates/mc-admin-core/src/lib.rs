//! # mc-admin-core
//!
//! Core types shared by the mc-admin crates.
//!
//! This crate provides:
//! - The error type and `Result` alias used across the workspace
//! - Remote console connection settings
//! - Command templates for every administrative action
//! - The `CommandExecutor` seam between the typed console and the transport

pub mod command;
pub mod config;
pub mod error;
pub mod executor;

pub use command::CommandBuilder;
pub use config::RconConfig;
pub use error::{AdminError, Result};
pub use executor::CommandExecutor;
