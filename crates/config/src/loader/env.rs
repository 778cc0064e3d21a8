//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for Splunk configuration.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - The primary name (`SPLUNK_URL`, `SPLUNK_TOKEN`) wins over its alias.
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::FiredAlertsSource;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn first_env_var(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| env_var_or_none(key))
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = first_env_var(&["SPLUNK_URL", "SPLUNK_BASE_URL"]) {
        loader.set_base_url(Some(url));
    }
    if let Some(token) = first_env_var(&["SPLUNK_TOKEN", "SPLUNK_API_TOKEN"]) {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = env_var_or_none("SPLUNK_SKIP_VERIFY") {
        loader.set_skip_verify(Some(skip.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: "SPLUNK_SKIP_VERIFY".to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    if let Some(timeout) = env_var_or_none("SPLUNK_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "SPLUNK_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(category) = env_var_or_none("SPLUNK_ALERT_CATEGORY") {
        loader.set_alert_category(Some(category));
    }
    if let Some(source) = env_var_or_none("SPLUNK_FIRED_ALERTS_SOURCE") {
        let source: FiredAlertsSource =
            source
                .parse()
                .map_err(|message| ConfigError::InvalidValue {
                    var: "SPLUNK_FIRED_ALERTS_SOURCE".to_string(),
                    message,
                })?;
        loader.set_fired_alerts_source(Some(source));
    }
    Ok(())
}
