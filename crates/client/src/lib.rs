//! Read-only Splunk catalog client.
//!
//! This crate lists saved searches, alerts, fired alerts, indexes and search
//! macros from a Splunk management endpoint, folding Splunk's two result
//! shapes (paginated REST listings and the unpaginated export stream) into one
//! [`PageResult`] contract. It also resolves which alerts reference a keyword,
//! directly or through the macros their searches call.

pub mod cancellation;
pub mod client;
pub mod decode;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
mod name_merge;
pub mod resolver;
mod serde_helpers;
pub mod spl;
pub mod tools;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use cancellation::CancellationToken;
pub use client::SplunkClient;
pub use client::builder::SplunkClientBuilder;
pub use endpoints::FiredAlertQuery;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{Alert, FiredAlert, Index, Macro, PageResult, SavedSearch};
pub use resolver::{Resolution, resolve_alerts_by_keyword};
pub use tools::ToolOutput;
