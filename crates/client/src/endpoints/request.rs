//! Single-shot HTTP send with status checking and request metrics.
//!
//! Requests are sent exactly once. Non-success responses are turned into
//! [`ClientError::ApiError`] carrying the status, with Splunk's
//! `{"messages": [...]}` body rendered into a readable message when present.

use std::time::{Duration, Instant};

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::SplunkMessages;

/// Sends an HTTP request once and checks the response status.
///
/// # Arguments
///
/// * `builder` - The `reqwest::RequestBuilder` to execute
/// * `endpoint` - Endpoint path used as the metrics label
/// * `method` - HTTP method used as the metrics label
/// * `timeout` - Configured request budget, reported when the request times out
/// * `metrics` - Optional metrics collector
///
/// # Errors
///
/// Returns `ClientError::Timeout` when the budget is exceeded,
/// `ClientError::HttpError` for other transport failures and
/// `ClientError::ApiError` for non-2xx statuses.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }
    debug!(endpoint, method, "Sending Splunk request");

    let started = Instant::now();
    let result = check_status(builder.send().await, timeout).await;
    let elapsed = started.elapsed();

    if let Some(m) = metrics {
        let status = match &result {
            Ok(response) => Some(response.status().as_u16()),
            Err(e) => e.status(),
        };
        m.record_request_duration(endpoint, method, elapsed, status);
        if let Err(e) = &result {
            m.record_client_error(endpoint, method, e);
        }
    }

    if let Err(e) = &result {
        debug!(endpoint, method, error = %e, "Splunk request failed");
    }
    result
}

async fn check_status(
    sent: std::result::Result<Response, reqwest::Error>,
    timeout: Duration,
) -> Result<Response> {
    let response = sent.map_err(|e| ClientError::from_reqwest(e, timeout))?;
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Try to parse Splunk error messages for a cleaner display
    let message = match serde_json::from_str::<SplunkMessages>(&body) {
        Ok(m) if !m.messages.is_empty() => m.joined(),
        _ => body,
    };

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}
