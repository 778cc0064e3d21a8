//! Shared test utilities for splunk-catalog integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (tokens, base URLs).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `SPLUNK_TOKEN` is set to "test-token" unless overridden.

use assert_cmd::Command;

/// Every variable the config loader reads; cleared so the host cannot leak in.
const HOST_VARS: [&str; 9] = [
    "SPLUNK_URL",
    "SPLUNK_BASE_URL",
    "SPLUNK_API_TOKEN",
    "SPLUNK_SKIP_VERIFY",
    "SPLUNK_TIMEOUT",
    "SPLUNK_ALERT_CATEGORY",
    "SPLUNK_FIRED_ALERTS_SOURCE",
    "SPLUNK_METRICS_BIND",
    "RUST_LOG",
];

/// Returns a hermetic `splunk-catalog` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `SPLUNK_TOKEN` is set to a dummy value to satisfy config validation.
/// - Other `SPLUNK_*` variables are cleared.
pub fn catalog_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunk-catalog");
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("SPLUNK_TOKEN", "test-token");
    for var in HOST_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Returns a hermetic `splunk-catalog` command pointed at `base_url`.
#[allow(dead_code)]
pub fn catalog_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = catalog_cmd();
    cmd.env("SPLUNK_URL", base_url);
    cmd
}
