//! Main Splunk catalog client and API methods.
//!
//! This module provides the primary [`SplunkClient`] for reading the Splunk
//! catalog over the REST API with a static bearer token.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `saved_searches`: Saved search listing
//! - `alerts`: Alert listing (emulated pagination)
//! - `fired_alerts`: Fired alert history
//! - `indexes`: Index listing
//! - `macros`: Search macro listing
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Cross-entity lookups (see [`crate::resolver`])
//!
//! # Invariants
//! - The client holds no per-call state; clones share one connection pool.
//! - Every method races its remote call against the caller's
//!   [`CancellationToken`](crate::CancellationToken).

pub mod builder;

mod alerts;
mod fired_alerts;
mod indexes;
mod macros;
mod saved_searches;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::metrics::MetricsCollector;

/// Splunk catalog client.
///
/// # Creating a Client
///
/// Use [`SplunkClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use splunk_catalog_client::SplunkClient;
/// use secrecy::SecretString;
///
/// let client = SplunkClient::builder()
///     .base_url("https://localhost:8089".to_string())
///     .api_token(SecretString::new("my-token".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_token: SecretString,
    pub(crate) timeout: Duration,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl SplunkClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing a [`SplunkClient`].
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn token(&self) -> &str {
        self.api_token.expose_secret()
    }
}
