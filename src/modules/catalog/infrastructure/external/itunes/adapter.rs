use async_trait::async_trait;

use crate::{
    modules::catalog::application::ports::FeedSource,
    modules::catalog::infrastructure::http_client::RateLimitClient,
    shared::{config::StorefrontConfig, errors::AppResult},
};

use super::models::RawFeedDocument;

/// iTunes top-albums feed adapter
pub struct ITunesFeedAdapter {
    http_client: RateLimitClient,
    feed_url: String,
}

impl ITunesFeedAdapter {
    pub fn new(config: &StorefrontConfig) -> AppResult<Self> {
        let http_client = RateLimitClient::for_itunes(config.request_timeout, &config.user_agent)?;
        Ok(Self::with_client(http_client, config.resolved_feed_url()))
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: RateLimitClient, feed_url: String) -> Self {
        Self {
            http_client,
            feed_url,
        }
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Check if a request can be made immediately (for testing and monitoring)
    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }
}

#[async_trait]
impl FeedSource for ITunesFeedAdapter {
    fn name(&self) -> &'static str {
        "itunes"
    }

    async fn fetch(&self) -> AppResult<RawFeedDocument> {
        log::info!("iTunes: Fetching top albums from '{}'", self.feed_url);

        let body = self.http_client.get_text(&self.feed_url).await?;
        let document = RawFeedDocument::from_json(&body)?;

        log::info!(
            "iTunes: Received {} feed entries",
            document.feed.as_ref().map_or(0, |feed| feed.entry_count())
        );
        Ok(document)
    }
}
