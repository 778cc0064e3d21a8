//! Configuration types for the Splunk catalog server.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout).
//! - Define catalog behavior settings (resolver category, fired alert source).
//! - Define the top-level `Config` combining both.
//!
//! Does NOT handle:
//! - Loading from env or `.env` files (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - The API token is always held as a `SecretString`.
//! - `base_url` never carries a trailing slash once built by the loader.

use secrecy::SecretString;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{DEFAULT_ALERT_CATEGORY, DEFAULT_SPLUNK_PORT, DEFAULT_TIMEOUT_SECS};

/// Connection configuration for the Splunk server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Splunk management endpoint (e.g., https://localhost:8089)
    pub base_url: String,
    /// Static bearer token attached to every request
    pub api_token: SecretString,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ConnectionConfig {
    /// Connection settings for a local development instance.
    pub fn localhost(api_token: SecretString) -> Self {
        Self {
            base_url: format!("https://localhost:{}", DEFAULT_SPLUNK_PORT),
            api_token,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Which remote shape backs the fired alerts listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FiredAlertsSource {
    /// Audit-log search over `index=_audit` through the export endpoint.
    #[default]
    AuditLog,
    /// Native `/services/alerts/fired_alerts` listing.
    Native,
}

impl FromStr for FiredAlertsSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "audit" | "audit_log" | "audit-log" => Ok(Self::AuditLog),
            "native" => Ok(Self::Native),
            other => Err(format!("expected 'audit' or 'native', got '{}'", other)),
        }
    }
}

impl fmt::Display for FiredAlertsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuditLog => write!(f, "audit"),
            Self::Native => write!(f, "native"),
        }
    }
}

/// Catalog behavior settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Title tag the keyword resolver restricts alerts to.
    pub alert_category: String,
    /// Backing shape for fired alert listings.
    pub fired_alerts_source: FiredAlertsSource,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            alert_category: DEFAULT_ALERT_CATEGORY.to_string(),
            fired_alerts_source: FiredAlertsSource::default(),
        }
    }
}

/// Main configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub catalog: CatalogConfig,
}
