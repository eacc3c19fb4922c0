use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::catalog::domain::{entities::CatalogItem, value_objects::SortScheme};

/// Visible items plus the counts a header needs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseCatalogResult {
    pub items: Vec<CatalogItem>,
    /// Size of the loaded catalog before search
    pub total_count: usize,
    pub visible_count: usize,
    pub search_term: String,
    pub sort: SortScheme,
    pub fetched_at: DateTime<Utc>,
}
