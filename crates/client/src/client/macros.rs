//! Search macro API methods for [`SplunkClient`].

use crate::cancellation::CancellationToken;
use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Macro, PageResult};

impl SplunkClient {
    /// List search macros. `count` is clamped to 100.
    pub async fn list_macros(
        &self,
        count: usize,
        offset: usize,
        cancel: &CancellationToken,
    ) -> Result<PageResult<Macro>> {
        cancel
            .run(endpoints::list_macros(
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
