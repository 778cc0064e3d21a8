//! Configuration management for the Splunk catalog server.
//!
//! This crate provides types and loaders for Splunk connection and catalog
//! settings sourced from environment variables and `.env` files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{CatalogConfig, Config, ConnectionConfig, FiredAlertsSource};
