//! Fired alert tests for both sources.
//!
//! # Invariants
//! - Audit-log `total` comes from a separate `| stats count` search
//! - No page search is issued when `offset >= total`
//! - The page search never reaches back past `offset` on a short last page
//! - `count` is clamped to 500 (audit log) or 100 (native)

mod common;

use common::*;
use splunk_catalog_client::FiredAlertQuery;
use wiremock::matchers::{body_string_contains, method, path, query_param};

fn audit_query() -> FiredAlertQuery {
    FiredAlertQuery::AuditLog {
        ss_name: "*".to_string(),
        earliest: "-24h".to_string(),
    }
}

fn count_rows(n: usize) -> serde_json::Value {
    serde_json::json!([
        {"preview": true, "result": {"count": "1"}},
        {"preview": false, "result": {"count": n.to_string()}}
    ])
}

#[tokio::test]
async fn test_audit_fired_alerts_count_then_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs/export"))
        .and(body_string_contains("stats+count"))
        .respond_with(export_response(&load_fixture("export/count_rows.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs/export"))
        .and(body_string_contains("head+2+%7C+tail+2"))
        .respond_with(export_response(&load_fixture(
            "export/fired_alert_rows.json",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_fired_alerts(&audit_query(), 2, 0, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(page.total, 37);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].search_name, "BT_Alert - Okta MFA bypass");
    assert_eq!(page.items[0].time, "2026-10-18T09:12:44.000+00:00");
}

#[tokio::test]
async fn test_audit_fired_alerts_short_last_page_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs/export"))
        .and(body_string_contains("stats+count"))
        .respond_with(export_response(&count_rows(25)))
        .mount(&mock_server)
        .await;

    // offset 20, count 10, total 25: keep rows 20..25, i.e. head 25 | tail 5.
    Mock::given(method("POST"))
        .and(path("/services/search/jobs/export"))
        .and(body_string_contains("head+25+%7C+tail+5"))
        .respond_with(export_response(&serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_fired_alerts(&audit_query(), 10, 20, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(page.total, 25);
}

#[tokio::test]
async fn test_audit_fired_alerts_offset_past_total_skips_page_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs/export"))
        .and(body_string_contains("stats+count"))
        .respond_with(export_response(&count_rows(15)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs/export"))
        .and(body_string_contains("table+_time+ss_name"))
        .respond_with(export_response(&serde_json::json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_fired_alerts(&audit_query(), 10, 20, &CancellationToken::new())
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 15);
}

#[tokio::test]
async fn test_audit_fired_alerts_clamps_to_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs/export"))
        .and(body_string_contains("stats+count"))
        .respond_with(export_response(&count_rows(2000)))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs/export"))
        .and(body_string_contains("head+500+%7C+tail+500"))
        .respond_with(export_response(&serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_fired_alerts(&audit_query(), 10_000, 0, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(page.count, 500);
    assert_eq!(page.total, 2000);
}

#[tokio::test]
async fn test_audit_fired_alerts_only_preview_count_is_zero() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs/export"))
        .and(body_string_contains("stats+count"))
        .respond_with(export_response(&load_fixture(
            "export/count_preview_only.json",
        )))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_fired_alerts(&audit_query(), 10, 0, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_audit_fired_alerts_rejects_bad_earliest_without_calling_splunk() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let query = FiredAlertQuery::AuditLog {
        ss_name: "*".to_string(),
        earliest: "-24h | delete".to_string(),
    };
    let client = test_client(&mock_server);
    let err = client
        .list_fired_alerts(&query, 10, 0, &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("earliest"));
}

#[tokio::test]
async fn test_native_fired_alerts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/alerts/fired_alerts"))
        .and(query_param("count", "100"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("fired_alerts/list_fired_alerts.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_fired_alerts(&FiredAlertQuery::Native, 500, 0, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(page.count, 100);
    assert_eq!(page.total, 2);
    assert_eq!(page.items[0].search_name, "BT_Alert - Okta MFA bypass");
    assert_eq!(page.items[0].time, "2026-10-18T09:12:44+00:00");
    assert_eq!(page.items[1].time, "");
}
