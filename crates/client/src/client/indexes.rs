//! Index API methods for [`SplunkClient`].
//!
//! # What this module does NOT handle:
//! - Low-level index endpoint HTTP calls (in `crate::endpoints::indexes`)

use crate::cancellation::CancellationToken;
use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Index, PageResult};

impl SplunkClient {
    /// List indexes. `count` is clamped to 100.
    pub async fn list_indexes(
        &self,
        count: usize,
        offset: usize,
        cancel: &CancellationToken,
    ) -> Result<PageResult<Index>> {
        cancel
            .run(endpoints::list_indexes(
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
