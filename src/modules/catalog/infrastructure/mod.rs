pub mod external;
pub mod http_client;
pub mod sources;

pub use external::itunes::ITunesFeedAdapter;
pub use http_client::{RateLimitClient, RetryPolicy};
pub use sources::StaticFeedSource;
