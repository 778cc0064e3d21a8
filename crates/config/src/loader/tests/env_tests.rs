//! Environment variable tests for the configuration loader.

use std::time::Duration;

use secrecy::ExposeSecret;
use serial_test::serial;

use super::{env_lock, with_loader_env};
use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use crate::types::FiredAlertsSource;

#[test]
#[serial]
fn test_primary_env_vars() {
    let _lock = env_lock().lock().unwrap();
    with_loader_env(
        &[
            ("SPLUNK_URL", "https://splunk.example.com:8089"),
            ("SPLUNK_TOKEN", "env-token"),
            ("SPLUNK_TIMEOUT", "45"),
            ("SPLUNK_SKIP_VERIFY", "true"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.connection.base_url, "https://splunk.example.com:8089");
            assert_eq!(config.connection.api_token.expose_secret(), "env-token");
            assert_eq!(config.connection.timeout, Duration::from_secs(45));
            assert!(config.connection.skip_verify);
        },
    );
}

#[test]
#[serial]
fn test_alias_env_vars() {
    let _lock = env_lock().lock().unwrap();
    with_loader_env(
        &[
            ("SPLUNK_BASE_URL", "https://alias.example.com:8089"),
            ("SPLUNK_API_TOKEN", "alias-token"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.connection.base_url, "https://alias.example.com:8089");
            assert_eq!(config.connection.api_token.expose_secret(), "alias-token");
        },
    );
}

#[test]
#[serial]
fn test_primary_wins_over_alias() {
    let _lock = env_lock().lock().unwrap();
    with_loader_env(
        &[
            ("SPLUNK_URL", "https://primary.example.com:8089"),
            ("SPLUNK_BASE_URL", "https://alias.example.com:8089"),
            ("SPLUNK_TOKEN", "primary"),
            ("SPLUNK_API_TOKEN", "alias"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(
                config.connection.base_url,
                "https://primary.example.com:8089"
            );
            assert_eq!(config.connection.api_token.expose_secret(), "primary");
        },
    );
}

#[test]
#[serial]
fn test_blank_primary_falls_back_to_alias() {
    let _lock = env_lock().lock().unwrap();
    with_loader_env(
        &[
            ("SPLUNK_URL", "   "),
            ("SPLUNK_BASE_URL", "https://alias.example.com:8089"),
            ("SPLUNK_TOKEN", "t"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.connection.base_url, "https://alias.example.com:8089");
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let _lock = env_lock().lock().unwrap();
    with_loader_env(
        &[
            ("SPLUNK_URL", "https://env.example.com:8089"),
            ("SPLUNK_TOKEN", "env-token"),
        ],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .with_base_url("https://cli.example.com:8089".to_string())
                .build()
                .unwrap();
            assert_eq!(config.connection.base_url, "https://cli.example.com:8089");
            assert_eq!(config.connection.api_token.expose_secret(), "env-token");
        },
    );
}

#[test]
#[serial]
fn test_invalid_timeout_env() {
    let _lock = env_lock().lock().unwrap();
    with_loader_env(&[("SPLUNK_TIMEOUT", "soon")], || {
        let err = ConfigLoader::new().from_env().err().unwrap();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "SPLUNK_TIMEOUT")
        );
    });
}

#[test]
#[serial]
fn test_invalid_skip_verify_env() {
    let _lock = env_lock().lock().unwrap();
    with_loader_env(&[("SPLUNK_SKIP_VERIFY", "yes")], || {
        let err = ConfigLoader::new().from_env().err().unwrap();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "SPLUNK_SKIP_VERIFY")
        );
    });
}

#[test]
#[serial]
fn test_catalog_env_vars() {
    let _lock = env_lock().lock().unwrap();
    with_loader_env(
        &[
            ("SPLUNK_URL", "https://localhost:8089"),
            ("SPLUNK_TOKEN", "t"),
            ("SPLUNK_ALERT_CATEGORY", "SOC_Alert"),
            ("SPLUNK_FIRED_ALERTS_SOURCE", "native"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.catalog.alert_category, "SOC_Alert");
            assert_eq!(config.catalog.fired_alerts_source, FiredAlertsSource::Native);
        },
    );
}

#[test]
#[serial]
fn test_invalid_fired_alerts_source_env() {
    let _lock = env_lock().lock().unwrap();
    with_loader_env(&[("SPLUNK_FIRED_ALERTS_SOURCE", "rest")], || {
        let err = ConfigLoader::new().from_env().err().unwrap();
        assert!(err.to_string().contains("SPLUNK_FIRED_ALERTS_SOURCE"));
    });
}

#[test]
#[serial]
fn test_env_var_or_none_trims_and_filters() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars(
        [
            ("SPLUNK_CATALOG_TEST_A", Some("  value  ")),
            ("SPLUNK_CATALOG_TEST_B", Some("   ")),
            ("SPLUNK_CATALOG_TEST_C", None),
        ],
        || {
            assert_eq!(
                env_var_or_none("SPLUNK_CATALOG_TEST_A").as_deref(),
                Some("value")
            );
            assert_eq!(env_var_or_none("SPLUNK_CATALOG_TEST_B"), None);
            assert_eq!(env_var_or_none("SPLUNK_CATALOG_TEST_C"), None);
        },
    );
}
