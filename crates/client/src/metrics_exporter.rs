//! Prometheus exposition for catalog metrics.
//!
//! Installs the global recorder the [`MetricsCollector`](crate::metrics::MetricsCollector)
//! macros write to and serves it at `http://<bind>/metrics`.

use std::net::{AddrParseError, SocketAddr};

use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder};
use tracing::info;

use crate::metrics::{METRIC_REQUEST_DURATION, describe_metrics};

/// Latency buckets in seconds. Export-backed listings read whole result sets,
/// so the tail reaches past the default timeout.
const REQUEST_DURATION_BUCKETS: &[f64] = &[0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 15.0, 30.0, 60.0];

/// Handle for an installed Prometheus exporter.
#[derive(Debug)]
pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Parse `bind_addr`, install the recorder and start the scrape listener.
    ///
    /// Only one recorder may exist per process; a second call fails.
    pub fn install(bind_addr: &str) -> Result<Self, MetricsExporterError> {
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|source| MetricsExporterError::InvalidBindAddress {
                addr: bind_addr.to_string(),
                source,
            })?;

        PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(METRIC_REQUEST_DURATION.to_string()),
                REQUEST_DURATION_BUCKETS,
            )?
            .with_http_listener(bind_addr)
            .install()?;
        describe_metrics();

        info!(%bind_addr, "Serving catalog metrics");
        Ok(Self { bind_addr })
    }

    /// Address the scrape listener is bound to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Errors from [`MetricsExporter::install`].
#[derive(Debug, thiserror::Error)]
pub enum MetricsExporterError {
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidBindAddress {
        addr: String,
        source: AddrParseError,
    },

    /// Bad bucket configuration, listener failure, or a recorder already installed.
    #[error("Failed to install Prometheus exporter: {0}")]
    Install(#[from] BuildError),
}
