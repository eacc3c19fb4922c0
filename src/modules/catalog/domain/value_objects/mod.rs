pub mod search_field;
pub mod sort_scheme;

pub use search_field::SearchField;
pub use sort_scheme::{SortDirection, SortKey, SortScheme};
