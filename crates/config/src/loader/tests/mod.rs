//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;

pub mod dotenv_tests;
pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, for clearing with `temp_env`.
pub const LOADER_VARS: [&str; 8] = [
    "SPLUNK_URL",
    "SPLUNK_BASE_URL",
    "SPLUNK_TOKEN",
    "SPLUNK_API_TOKEN",
    "SPLUNK_SKIP_VERIFY",
    "SPLUNK_TIMEOUT",
    "SPLUNK_ALERT_CATEGORY",
    "SPLUNK_FIRED_ALERTS_SOURCE",
];

/// Run `f` with every loader variable unset, then the given ones applied.
pub fn with_loader_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let mut all: Vec<(&str, Option<&str>)> = LOADER_VARS.iter().map(|k| (*k, None)).collect();
    for &(key, value) in vars {
        all.retain(|(k, _)| *k != key);
        all.push((key, Some(value)));
    }
    temp_env::with_vars(all, f);
}
