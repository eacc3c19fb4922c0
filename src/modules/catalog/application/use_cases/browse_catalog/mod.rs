mod handler;
mod query;
mod result;

pub use handler::BrowseCatalogHandler;
pub use query::BrowseCatalogQuery;
pub use result::BrowseCatalogResult;
