pub mod item_pipeline;
pub mod search_filter;
pub mod sorter;
pub mod text_folder;

pub use item_pipeline::{apply, CatalogView, ItemPipeline};
pub use search_filter::{filter, SearchFilter};
pub use sorter::sort;
pub use text_folder::TextFolder;
