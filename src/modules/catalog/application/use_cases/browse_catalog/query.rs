use crate::modules::catalog::domain::{services::TextFolder, value_objects::SortScheme};
use crate::shared::errors::AppResult;

/// Query for browsing the loaded catalog
///
/// The search term is folded on construction, so it is already in the
/// form the filter compares against.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowseCatalogQuery {
    pub search_term: String,
    pub sort: SortScheme,
}

impl BrowseCatalogQuery {
    pub fn new(search_term: impl AsRef<str>, sort: SortScheme) -> Self {
        Self {
            search_term: TextFolder::search_pipeline().fold(search_term.as_ref()),
            sort,
        }
    }

    /// Build from raw UI values: the typed text and a sort option value
    pub fn from_raw(search_term: &str, sort_value: &str) -> AppResult<Self> {
        Ok(Self::new(search_term, sort_value.parse()?))
    }
}
