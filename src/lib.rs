pub mod modules;
pub mod shared;

use std::path::Path;
use std::sync::Arc;

use modules::catalog::{FeedSource, ITunesFeedAdapter, StaticFeedSource, StorefrontService};
use shared::{errors::AppResult, StorefrontConfig};

pub use modules::catalog::{
    BrowseCatalogQuery, BrowseCatalogResult, CatalogItem, FeedShapeError, LoadStatus, SearchField,
    SortScheme,
};
pub use shared::errors::AppError;

/// Pick the feed source: a local document when `file` is given, the live
/// iTunes feed otherwise.
pub fn feed_source(config: &StorefrontConfig, file: Option<&Path>) -> AppResult<Arc<dyn FeedSource>> {
    match file {
        Some(path) => {
            log::info!("Using feed document at {}", path.display());
            Ok(Arc::new(StaticFeedSource::from_file(path)))
        }
        None => Ok(Arc::new(ITunesFeedAdapter::new(config)?)),
    }
}

/// Wire a storefront service from configuration
pub fn build_service(config: &StorefrontConfig, file: Option<&Path>) -> AppResult<StorefrontService> {
    StorefrontService::from_config(feed_source(config, file)?, config)
}
