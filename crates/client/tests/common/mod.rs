//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Splunk catalog client. All integration tests should
//! use these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::time::Duration;

use secrecy::SecretString;

// Re-export test utilities from splunk-catalog-client
#[allow(unused_imports)]
pub use splunk_catalog_client::testing::{alert_rows, export_body, listing_body, load_fixture};

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use splunk_catalog_client::{CancellationToken, SplunkClient, endpoints};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token every mock expects in the `Authorization` header.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

/// Timeout passed to endpoint functions in tests.
#[allow(dead_code)]
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Build a client pointed at a mock server.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> SplunkClient {
    SplunkClient::builder()
        .base_url(server.uri())
        .api_token(SecretString::new(TEST_TOKEN.to_string().into()))
        .timeout(TEST_TIMEOUT)
        .build()
        .expect("test client should build")
}

/// An export-stream response built from a JSON array of rows.
#[allow(dead_code)]
pub fn export_response(rows: &serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "application/json")
        .set_body_string(export_body(rows))
}
