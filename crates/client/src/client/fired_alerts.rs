//! Fired alert API methods for [`SplunkClient`].

use crate::cancellation::CancellationToken;
use crate::client::SplunkClient;
use crate::endpoints::{self, FiredAlertQuery};
use crate::error::Result;
use crate::models::{FiredAlert, PageResult};

impl SplunkClient {
    /// List fired alerts from the source described by `query`.
    ///
    /// The audit-log source issues two searches (a count, then the page) and
    /// clamps `count` to 500; the native source clamps to 100.
    pub async fn list_fired_alerts(
        &self,
        query: &FiredAlertQuery,
        count: usize,
        offset: usize,
        cancel: &CancellationToken,
    ) -> Result<PageResult<FiredAlert>> {
        cancel
            .run(endpoints::list_fired_alerts(
                &self.http,
                &self.base_url,
                self.token(),
                query,
                count,
                offset,
                self.timeout,
                self.metrics.as_ref(),
            ))
            .await
    }

    /// Count events matched by a base search through the export endpoint.
    pub async fn count_search(&self, base_search: &str, cancel: &CancellationToken) -> Result<usize> {
        cancel
            .run(endpoints::export_count(
                &self.http,
                &self.base_url,
                self.token(),
                base_search,
                self.timeout,
                self.metrics.as_ref(),
            ))
            .await
    }
}
