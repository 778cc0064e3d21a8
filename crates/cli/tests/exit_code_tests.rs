//! Integration tests for structured exit codes.
//!
//! These tests verify that splunk-catalog returns the correct exit codes
//! for different failure scenarios, enabling reliable shell scripting.

mod common;

use common::{catalog_cmd, catalog_cmd_with_base_url};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_failed_operation_returns_exit_code_1() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/saved/searches"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "messages": [{ "type": "WARN", "text": "call not properly authenticated" }]
        })))
        .mount(&server)
        .await;

    catalog_cmd_with_base_url(&server.uri())
        .arg("saved-searches")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "failed to get saved searches: unexpected status code 401",
        ))
        .stderr(predicate::str::contains("WARN: call not properly authenticated"));
}

#[test]
fn test_connection_refused_returns_exit_code_1_with_message() {
    catalog_cmd_with_base_url("http://127.0.0.1:1")
        .arg("indexes")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to get indexes:"));
}

#[test]
fn test_missing_base_url_returns_exit_code_5() {
    catalog_cmd()
        .arg("indexes")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Base URL is required"));
}

#[test]
fn test_missing_token_returns_exit_code_5() {
    catalog_cmd_with_base_url("https://localhost:8089")
        .env_remove("SPLUNK_TOKEN")
        .arg("macros")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("API token is required"));
}

#[test]
fn test_invalid_earliest_is_rejected_before_any_request() {
    catalog_cmd_with_base_url("http://127.0.0.1:1")
        .args(["fired-alerts", "--earliest", "-24h | delete"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid argument earliest"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    catalog_cmd().arg("dashboards").assert().code(2);
}
