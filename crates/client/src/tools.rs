//! Caller-facing catalog operations.
//!
//! Responsibilities:
//! - Accept loosely-typed arguments (as a tool-invocation layer would pass
//!   them), apply defaults, and run the matching client call.
//! - Render each result as an advisory note, a blank line, and compact JSON
//!   `{<kind>: [...], count, offset, total}`.
//! - Turn every failure into an error output `failed to <operation>: <detail>`.
//!
//! Does NOT handle:
//! - Tool dispatch, schema declaration, or any transport loop.
//!
//! Invariants:
//! - The `count` reported in the JSON and the note is the effective (clamped) count.
//! - No operation ever panics or returns `Err`; failures are `ToolOutput { is_error: true }`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use splunk_catalog_config::{
    CatalogConfig, FiredAlertsSource,
    constants::{
        DEFAULT_FIRED_ALERTS_COUNT, DEFAULT_FIRED_ALERTS_EARLIEST, DEFAULT_FIRED_ALERTS_SS_NAME,
        DEFAULT_LIST_COUNT, MAX_LIST_COUNT,
    },
};

use crate::cancellation::CancellationToken;
use crate::client::SplunkClient;
use crate::endpoints::FiredAlertQuery;
use crate::error::Result;
use crate::models::PageResult;
use crate::resolver::resolve_alerts_by_keyword;

/// Text result of one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    pub fn success(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    pub fn error(text: String) -> Self {
        Self {
            text,
            is_error: true,
        }
    }
}

/// Paging arguments shared by every listing operation.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PageArgs {
    #[serde(default, deserialize_with = "opt_count_from_number")]
    pub count: Option<usize>,
    #[serde(default, deserialize_with = "opt_count_from_number")]
    pub offset: Option<usize>,
}

/// Arguments for [`list_alerts`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ListAlertsArgs {
    #[serde(flatten)]
    pub page: PageArgs,
    /// Case-insensitive substring the alert title must contain.
    #[serde(default)]
    pub title: Option<String>,
}

/// Arguments for [`list_fired_alerts`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ListFiredAlertsArgs {
    #[serde(flatten)]
    pub page: PageArgs,
    /// Saved search name filter (wildcards allowed); audit-log source only.
    #[serde(default)]
    pub ss_name: Option<String>,
    /// Earliest time modifier; audit-log source only.
    #[serde(default)]
    pub earliest: Option<String>,
}

/// Arguments for [`alerts_by_keyword`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct KeywordArgs {
    #[serde(default)]
    pub keyword: Option<String>,
}

/// Accept any JSON number; fractions truncate and negatives floor at 0.
fn opt_count_from_number<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(value.map(|n| {
        if let Some(u) = n.as_u64() {
            usize::try_from(u).unwrap_or(usize::MAX)
        } else if let Some(f) = n.as_f64() {
            if f <= 0.0 { 0 } else { f as usize }
        } else {
            0
        }
    }))
}

/// List saved searches (default count 10, max 100).
pub async fn list_saved_searches(
    client: &SplunkClient,
    args: PageArgs,
    cancel: &CancellationToken,
) -> ToolOutput {
    let (count, offset) = args.resolve(DEFAULT_LIST_COUNT);
    let result = client.list_saved_searches(count, offset, cancel).await;
    render_page("get saved searches", "searches", "saved searches", MAX_LIST_COUNT, result)
}

/// List alerts, optionally filtered by title (default count 10, max 100).
pub async fn list_alerts(
    client: &SplunkClient,
    args: ListAlertsArgs,
    cancel: &CancellationToken,
) -> ToolOutput {
    let (count, offset) = args.page.resolve(DEFAULT_LIST_COUNT);
    let result = client
        .list_alerts(count, offset, args.title.as_deref(), cancel)
        .await;
    render_page("get alerts", "alerts", "alerts", MAX_LIST_COUNT, result)
}

/// List fired alerts from the configured source (default count 100).
pub async fn list_fired_alerts(
    client: &SplunkClient,
    settings: &CatalogConfig,
    args: ListFiredAlertsArgs,
    cancel: &CancellationToken,
) -> ToolOutput {
    let (count, offset) = args.page.resolve(DEFAULT_FIRED_ALERTS_COUNT);
    let query = match settings.fired_alerts_source {
        FiredAlertsSource::AuditLog => FiredAlertQuery::AuditLog {
            ss_name: non_blank(args.ss_name, DEFAULT_FIRED_ALERTS_SS_NAME),
            earliest: non_blank(args.earliest, DEFAULT_FIRED_ALERTS_EARLIEST),
        },
        FiredAlertsSource::Native => FiredAlertQuery::Native,
    };
    let result = client
        .list_fired_alerts(&query, count, offset, cancel)
        .await;
    render_page(
        "get fired alerts",
        "alerts",
        "fired alerts",
        query.max_count(),
        result,
    )
}

/// List indexes (default count 10, max 100).
pub async fn list_indexes(
    client: &SplunkClient,
    args: PageArgs,
    cancel: &CancellationToken,
) -> ToolOutput {
    let (count, offset) = args.resolve(DEFAULT_LIST_COUNT);
    let result = client.list_indexes(count, offset, cancel).await;
    render_page("get indexes", "indexes", "indexes", MAX_LIST_COUNT, result)
}

/// List search macros (default count 10, max 100).
pub async fn list_macros(
    client: &SplunkClient,
    args: PageArgs,
    cancel: &CancellationToken,
) -> ToolOutput {
    let (count, offset) = args.resolve(DEFAULT_LIST_COUNT);
    let result = client.list_macros(count, offset, cancel).await;
    render_page("get macros", "macros", "macros", MAX_LIST_COUNT, result)
}

/// Summarize alerts in the configured category that reference a keyword.
pub async fn alerts_by_keyword(
    client: &SplunkClient,
    settings: &CatalogConfig,
    args: KeywordArgs,
    cancel: &CancellationToken,
) -> ToolOutput {
    let keyword = args.keyword.unwrap_or_default();
    match resolve_alerts_by_keyword(client, &settings.alert_category, &keyword, cancel).await {
        Ok(resolution) => ToolOutput::success(resolution.summary()),
        Err(e) => ToolOutput::error(format!("failed to resolve alerts by keyword: {}", e)),
    }
}

impl PageArgs {
    fn resolve(&self, default_count: usize) -> (usize, usize) {
        (
            self.count.unwrap_or(default_count),
            self.offset.unwrap_or(0),
        )
    }
}

fn non_blank(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn render_page<T: Serialize>(
    operation: &str,
    key: &str,
    noun: &str,
    max_count: usize,
    result: Result<PageResult<T>>,
) -> ToolOutput {
    let page = match result {
        Ok(page) => page,
        Err(e) => return ToolOutput::error(format!("failed to {}: {}", operation, e)),
    };

    let items = match serde_json::to_value(&page.items) {
        Ok(items) => items,
        Err(e) => return ToolOutput::error(format!("failed to marshal results: {}", e)),
    };

    let mut body = Map::new();
    body.insert(key.to_string(), items);
    body.insert("count".to_string(), Value::from(page.count));
    body.insert("offset".to_string(), Value::from(page.offset));
    body.insert("total".to_string(), Value::from(page.total));

    let note = format!(
        "Showing up to {} {} (as requested). Use 'offset' to paginate. Maximum per call is {}.",
        page.count, noun, max_count
    );
    ToolOutput::success(format!("{}\n\n{}", note, Value::Object(body)))
}
