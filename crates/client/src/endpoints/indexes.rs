//! Index listing endpoint.

use std::time::Duration;

use reqwest::Client;
use splunk_catalog_config::constants::MAX_LIST_COUNT;

use crate::endpoints::listing::fetch_listing;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{Index, PageResult};

/// List indexes with server-side pagination.
///
/// `count` is clamped to 100.
pub async fn list_indexes(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    count: usize,
    offset: usize,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<PageResult<Index>> {
    fetch_listing(
        client,
        base_url,
        auth_token,
        "/services/data/indexes",
        "Index",
        count.min(MAX_LIST_COUNT),
        offset,
        timeout,
        metrics,
    )
    .await
}
