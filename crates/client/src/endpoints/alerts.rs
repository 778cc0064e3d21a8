//! Alert listing with client-side (emulated) pagination.
//!
//! Splunk has no listing endpoint for "saved searches with actions", so alerts
//! come from a `| rest` search on the export endpoint. That stream is not
//! paginated: every matching row is read and the requested window is sliced
//! out locally.

use std::time::Duration;

use reqwest::Client;
use splunk_catalog_config::constants::MAX_LIST_COUNT;
use tracing::debug;

use crate::endpoints::export::export_results;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{Alert, PageResult};
use crate::spl;

/// List alerts, optionally narrowed to titles containing `title_filter`.
///
/// This scans the full matching set on every call; `total` is its size.
/// `count` is clamped to 100 before slicing, and an `offset` past the end
/// yields an empty page.
#[allow(clippy::too_many_arguments)]
pub async fn list_alerts(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    count: usize,
    offset: usize,
    title_filter: Option<&str>,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<PageResult<Alert>> {
    let count = count.min(MAX_LIST_COUNT);
    let search = spl::alerts_query(title_filter);

    let rows: Vec<Alert> =
        export_results(client, base_url, auth_token, &search, "Alert", timeout, metrics).await?;

    debug!(matched = rows.len(), count, offset, "Scanned alerts");
    Ok(PageResult::from_full_scan(rows, count, offset))
}
