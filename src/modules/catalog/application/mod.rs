pub mod ports;
pub mod service;
pub mod use_cases;

pub use ports::FeedSource;
pub use service::{FeedSnapshot, LoadState, LoadStatus, StorefrontService};
pub use use_cases::{BrowseCatalogHandler, BrowseCatalogQuery, BrowseCatalogResult};
