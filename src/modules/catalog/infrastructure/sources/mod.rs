pub mod static_source;

pub use static_source::StaticFeedSource;
