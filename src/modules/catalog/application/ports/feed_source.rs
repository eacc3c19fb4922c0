use async_trait::async_trait;

use crate::modules::catalog::infrastructure::external::itunes::RawFeedDocument;
use crate::shared::errors::AppResult;

/// Port (interface) for the ranked catalog feed
/// Infrastructure implements this for the live iTunes feed and for static documents
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Short name used in logs and snapshots
    fn name(&self) -> &'static str;

    /// Fetch the raw feed document. Transport retries, if any, happen in here.
    async fn fetch(&self) -> AppResult<RawFeedDocument>;
}
