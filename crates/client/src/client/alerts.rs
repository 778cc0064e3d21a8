//! Alert API methods for [`SplunkClient`].
//!
//! # What this module handles:
//! - Listing saved searches that have alert actions, with an optional title filter
//!
//! # What this module does NOT handle:
//! - Fired alert history (see `fired_alerts`)

use crate::cancellation::CancellationToken;
use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Alert, PageResult};

impl SplunkClient {
    /// List alerts whose title contains `title_filter` (case-insensitive).
    ///
    /// Splunk cannot page this query, so every call scans all matching alerts
    /// and slices the requested window locally. `count` is clamped to 100.
    pub async fn list_alerts(
        &self,
        count: usize,
        offset: usize,
        title_filter: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<PageResult<Alert>> {
        cancel
            .run(endpoints::list_alerts(
                &self.http,
                &self.base_url,
                self.token(),
                count,
                offset,
                title_filter,
                self.timeout,
                self.metrics.as_ref(),
            ))
            .await
    }
}
