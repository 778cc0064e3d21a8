//! Streaming search export endpoint.
//!
//! `POST /services/search/jobs/export` runs a search and streams its results
//! back as concatenated JSON rows. There is no server-side pagination; every
//! caller of this module reads the whole stream.

use std::time::Duration;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::decode::RowDecoder;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::spl;

const EXPORT_ENDPOINT: &str = "/services/search/jobs/export";

pub type ExportStream = BoxStream<'static, Result<Bytes>>;

/// Start an export search and return a decoder over its response body.
pub async fn open_export(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    search: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<RowDecoder<ExportStream>> {
    let url = format!("{}{}", base_url, EXPORT_ENDPOINT);
    debug!(search, "Starting export search");

    let form = [("search", search), ("output_mode", "json")];
    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .form(&form);
    let response = send_request(builder, EXPORT_ENDPOINT, "POST", timeout, metrics).await?;

    let body = response
        .bytes_stream()
        .map(move |chunk| chunk.map_err(|e| ClientError::from_reqwest(e, timeout)))
        .boxed();
    Ok(RowDecoder::new(body))
}

/// Run an export search and collect every final result row.
///
/// Reads the full result set; cost grows with the number of matching rows.
#[allow(clippy::too_many_arguments)]
pub async fn export_results<T>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    search: &str,
    model_type: &'static str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let decoder = open_export(client, base_url, auth_token, search, timeout, metrics).await?;
    let rows: Vec<T> = decoder.collect_results().await.inspect_err(|e| {
        record_decode_failure(e, model_type, metrics);
    })?;
    if let Some(m) = metrics {
        m.record_export_rows(model_type, rows.len());
    }
    Ok(rows)
}

/// Count the events matched by `base_search` with a separate `| stats count` query.
///
/// Preview rows are skipped; the last final row wins and an all-preview
/// stream counts as `0`.
pub async fn export_count(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    base_search: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<usize> {
    let search = spl::count_query(base_search);
    let decoder = open_export(client, base_url, auth_token, &search, timeout, metrics).await?;
    decoder.last_final_count().await.inspect_err(|e| {
        record_decode_failure(e, "CountResult", metrics);
    })
}

fn record_decode_failure(
    error: &ClientError,
    model_type: &'static str,
    metrics: Option<&MetricsCollector>,
) {
    if let (true, Some(m)) = (error.is_decode_error(), metrics) {
        m.record_deserialization_failure(EXPORT_ENDPOINT, model_type);
    }
}
