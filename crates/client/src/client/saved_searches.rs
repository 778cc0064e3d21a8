//! Saved search API methods for [`SplunkClient`].

use crate::cancellation::CancellationToken;
use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{PageResult, SavedSearch};

impl SplunkClient {
    /// List saved searches. `count` is clamped to 100.
    pub async fn list_saved_searches(
        &self,
        count: usize,
        offset: usize,
        cancel: &CancellationToken,
    ) -> Result<PageResult<SavedSearch>> {
        cancel
            .run(endpoints::list_saved_searches(
                &self.http,
                &self.base_url,
                self.token(),
                count,
                offset,
                self.timeout,
                self.metrics.as_ref(),
            ))
            .await
    }
}
