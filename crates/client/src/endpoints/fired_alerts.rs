//! Fired alert history from two interchangeable sources.
//!
//! # What this module handles:
//! - Audit-log history: `index=_audit action=alert_fired` via the export
//!   endpoint, with a separate count query for `total`
//! - Native history: `/services/alerts/fired_alerts` with server-side paging
//!
//! # What this module does NOT handle:
//! - Choosing a source; callers pass a [`FiredAlertQuery`]

use std::time::Duration;

use reqwest::Client;
use splunk_catalog_config::constants::{MAX_FIRED_ALERTS_EXPORT_COUNT, MAX_LIST_COUNT};
use tracing::debug;

use crate::endpoints::export::{export_count, export_results};
use crate::endpoints::listing::fetch_listing;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{FiredAlert, NativeFiredAlert, PageResult};
use crate::spl;

/// Where fired alerts are read from, and with which filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FiredAlertQuery {
    /// Audit-log firings of saved searches matching `ss_name` (wildcards allowed)
    /// since the `earliest` time modifier. `count` is clamped to 500.
    AuditLog { ss_name: String, earliest: String },
    /// Splunk's fired-alert listing. `count` is clamped to 100.
    Native,
}

impl FiredAlertQuery {
    /// Upper bound applied to the requested page size for this source.
    pub fn max_count(&self) -> usize {
        match self {
            Self::AuditLog { .. } => MAX_FIRED_ALERTS_EXPORT_COUNT,
            Self::Native => MAX_LIST_COUNT,
        }
    }
}

/// List fired alerts from the source selected by `query`.
#[allow(clippy::too_many_arguments)]
pub async fn list_fired_alerts(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    query: &FiredAlertQuery,
    count: usize,
    offset: usize,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<PageResult<FiredAlert>> {
    let count = count.min(query.max_count());
    match query {
        FiredAlertQuery::AuditLog { ss_name, earliest } => {
            list_audit_fired_alerts(
                client, base_url, auth_token, ss_name, earliest, count, offset, timeout, metrics,
            )
            .await
        }
        FiredAlertQuery::Native => {
            let page: PageResult<NativeFiredAlert> = fetch_listing(
                client,
                base_url,
                auth_token,
                "/services/alerts/fired_alerts",
                "NativeFiredAlert",
                count,
                offset,
                timeout,
                metrics,
            )
            .await?;
            Ok(PageResult {
                items: page.items.into_iter().map(FiredAlert::from).collect(),
                count: page.count,
                offset: page.offset,
                total: page.total,
            })
        }
    }
}

#[allow(clippy::too_many_arguments)]
async fn list_audit_fired_alerts(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    ss_name: &str,
    earliest: &str,
    count: usize,
    offset: usize,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<PageResult<FiredAlert>> {
    let base = spl::fired_alerts_base(ss_name, earliest)?;
    let total = export_count(client, base_url, auth_token, &base, timeout, metrics).await?;

    if count == 0 || offset >= total {
        debug!(total, count, offset, "Fired alert page is outside the result set");
        return Ok(PageResult::empty(count, offset, total));
    }

    // `tail` must not reach back past `offset` when the last page is short.
    let window = count.min(total - offset);
    let search = spl::fired_alerts_page_query(&base, offset + window, window);
    let items: Vec<FiredAlert> = export_results(
        client,
        base_url,
        auth_token,
        &search,
        "FiredAlert",
        timeout,
        metrics,
    )
    .await?;

    Ok(PageResult {
        items,
        count,
        offset,
        total,
    })
}
