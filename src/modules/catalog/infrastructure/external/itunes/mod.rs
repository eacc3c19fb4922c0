pub mod adapter;
pub mod mapper;
pub mod models;

pub use adapter::ITunesFeedAdapter;
pub use mapper::{normalize, normalize_json, CatalogMapper, FeedShapeError, ITunesMapper, CATALOG_IMAGE_HEIGHT};
pub use models::RawFeedDocument;
