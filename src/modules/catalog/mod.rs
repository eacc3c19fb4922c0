pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{
    BrowseCatalogHandler, BrowseCatalogQuery, BrowseCatalogResult, FeedSnapshot, FeedSource,
    LoadState, LoadStatus, StorefrontService,
};
pub use domain::{
    entities::CatalogItem,
    services::{filter, sort, CatalogView, ItemPipeline, SearchFilter},
    value_objects::{SearchField, SortDirection, SortKey, SortScheme},
};
pub use infrastructure::{
    external::itunes::{normalize, normalize_json, FeedShapeError, ITunesFeedAdapter},
    sources::StaticFeedSource,
};
