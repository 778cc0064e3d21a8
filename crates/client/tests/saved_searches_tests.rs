//! Saved search listing endpoint tests.

mod common;

use common::*;
use wiremock::matchers::{method, path, query_param};

#[tokio::test]
async fn test_list_saved_searches() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("saved_searches/list_saved_searches.json");

    Mock::given(method("GET"))
        .and(path("/services/saved/searches"))
        .and(query_param("count", "10"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_saved_searches(10, 0, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items[0].name, "Daily license report");
    assert_eq!(page.items[0].actions, "");
    assert_eq!(page.items[1].actions, "email,webhook");
    assert_eq!(page.items[2].description, "");
    assert!(page.items[2].disabled);
}

#[tokio::test]
async fn test_list_saved_searches_server_error_carries_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/saved/searches"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(load_fixture("errors/unauthorized.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .list_saved_searches(10, 0, &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(err.is_transport_error());
    assert!(err.to_string().contains("call not properly authenticated"));
}
