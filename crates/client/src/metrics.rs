//! Metrics collection for Splunk API calls.
//!
//! Request latency, request and error counts, decode failures, and the
//! number of rows each export stream carried.
//!
//! # What this module does NOT handle:
//! - Metrics exposition (see [`crate::metrics_exporter`])
//!
//! # Invariants
//! - Label names are shared across metrics: `endpoint`, `method`, `status`,
//!   `error_category`, `model_type`.
//! - Recording never fails and is a no-op without an installed recorder.

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "splunk_catalog_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "splunk_catalog_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "splunk_catalog_errors_total";

/// Metric name for deserialization failure counter.
pub const METRIC_DESERIALIZATION_FAILURES: &str = "splunk_catalog_deserialization_failures_total";

/// Metric name for rows read from export streams.
pub const METRIC_EXPORT_ROWS: &str = "splunk_catalog_export_rows_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, etc.)
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Request timeout
    Timeout,
    /// Malformed or unexpected response body
    Decode,
    /// Caller cancelled the call
    Cancelled,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Cancelled => "cancelled",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::ApiError { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Unknown
                }
            }
            ClientError::HttpError(e) if e.is_timeout() => ErrorCategory::Timeout,
            ClientError::HttpError(e) if e.is_decode() => ErrorCategory::Decode,
            ClientError::HttpError(_) => ErrorCategory::Transport,
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            ClientError::Cancelled => ErrorCategory::Cancelled,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for Splunk catalog calls.
///
/// Thin wrapper around the `metrics` crate macros with consistent labels.
/// A disabled collector drops every observation before touching the facade.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create a new, enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a disabled metrics collector.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record how long one catalog request took, labelled by its outcome.
    ///
    /// `status` is `None` when no response arrived; the label is then `none`.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }
        let status = status.map_or_else(|| "none".to_string(), |s| s.to_string());
        metrics::histogram!(
            METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status,
        )
        .record(duration.as_secs_f64());
    }

    /// Count one request sent to `endpoint`.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if self.enabled {
            metrics::counter!(
                METRIC_REQUESTS_TOTAL,
                "endpoint" => endpoint.to_string(),
                "method" => method.to_string(),
            )
            .increment(1);
        }
    }

    /// Count a failed request under its [`ErrorCategory`].
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        if self.enabled {
            metrics::counter!(
                METRIC_ERRORS_TOTAL,
                "endpoint" => endpoint.to_string(),
                "method" => method.to_string(),
                "error_category" => ErrorCategory::from(error).as_str(),
            )
            .increment(1);
        }
    }

    /// Count a body that did not decode into `model_type` (e.g. `Alert`).
    pub fn record_deserialization_failure(&self, endpoint: &str, model_type: &'static str) {
        if self.enabled {
            metrics::counter!(
                METRIC_DESERIALIZATION_FAILURES,
                "endpoint" => endpoint.to_string(),
                "model_type" => model_type,
            )
            .increment(1);
        }
    }

    /// Count final rows read from one export stream.
    ///
    /// Emulated pagination reads every matching row, so this tracks the real
    /// cost of alert listings independently of the page size asked for.
    pub fn record_export_rows(&self, model_type: &'static str, rows: usize) {
        if self.enabled {
            metrics::counter!(METRIC_EXPORT_ROWS, "model_type" => model_type)
                .increment(rows as u64);
        }
    }
}

/// Register help text for every catalog metric with the installed recorder.
pub fn describe_metrics() {
    metrics::describe_histogram!(
        METRIC_REQUEST_DURATION,
        metrics::Unit::Seconds,
        "Time from sending a catalog request to receiving its response headers"
    );
    metrics::describe_counter!(METRIC_REQUESTS_TOTAL, "Catalog requests sent");
    metrics::describe_counter!(METRIC_ERRORS_TOTAL, "Catalog requests that failed");
    metrics::describe_counter!(
        METRIC_DESERIALIZATION_FAILURES,
        "Responses that did not match the expected shape"
    );
    metrics::describe_counter!(METRIC_EXPORT_ROWS, "Final rows read from export streams");
}
