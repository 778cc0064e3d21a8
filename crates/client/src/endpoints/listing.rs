//! Native-paginated listing fetch shared by every `/services/...` collection.
//!
//! Responsibilities:
//! - Send `output_mode=json&count=<clamped>&offset=<offset>` and decode the
//!   `{entry, paging}` envelope.
//! - Copy each `entry[].name` into the decoded content.
//!
//! Does NOT handle:
//! - Client-side filtering; the server's page is returned as-is.
//!
//! Invariants:
//! - `count = 0` is never sent (Splunk reads it as "no limit"); one row is
//!   requested instead to learn `total`, and no items are returned.
//! - `total` comes from `paging.total`.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{ListResponse, PageResult};
use crate::name_merge::{HasName, attach_entry_name};

/// Fetch one page of a native listing endpoint.
///
/// `count` must already be clamped by the caller's policy.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn fetch_listing<T>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    endpoint: &'static str,
    model_type: &'static str,
    count: usize,
    offset: usize,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<PageResult<T>>
where
    T: DeserializeOwned + HasName,
{
    let url = format!("{}{}", base_url, endpoint);
    let wire_count = count.max(1);

    let query_params: Vec<(&str, String)> = vec![
        ("output_mode", "json".to_string()),
        ("count", wire_count.to_string()),
        ("offset", offset.to_string()),
    ];

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&query_params);
    let response = send_request(builder, endpoint, "GET", timeout, metrics).await?;

    let body = response
        .bytes()
        .await
        .map_err(|e| ClientError::from_reqwest(e, timeout))?;
    let resp: ListResponse<T> = serde_json::from_slice(&body).map_err(|e| {
        if let Some(m) = metrics {
            m.record_deserialization_failure(endpoint, model_type);
        }
        ClientError::InvalidResponse(format!("failed to decode {} listing: {}", endpoint, e))
    })?;

    let total = resp.paging.total;
    if count == 0 {
        return Ok(PageResult::empty(count, offset, total));
    }

    let items: Vec<T> = resp
        .entry
        .into_iter()
        .map(|e| attach_entry_name(e.name, e.content))
        .collect();

    debug!(endpoint, items = items.len(), total, offset, "Fetched listing page");

    Ok(PageResult {
        items,
        count,
        offset,
        total,
    })
}
