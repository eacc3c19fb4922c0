pub mod feed_source;

pub use feed_source::FeedSource;
#[cfg(test)]
pub use feed_source::MockFeedSource;
