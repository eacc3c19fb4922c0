pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::CatalogItem;
pub use value_objects::{SearchField, SortScheme};
