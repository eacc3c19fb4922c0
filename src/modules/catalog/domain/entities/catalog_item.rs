//! One normalized item in the store

use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::value_objects::SearchField;

/// Data model for one item in the store
///
/// Produced once per feed fetch by the normalizer. Filtering and sorting
/// only borrow items; nothing downstream mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Opaque external identifier, unique within one feed snapshot
    pub id: String,
    pub name: String,
    pub artist: String,
    pub category: String,
    /// URL of the 170px rendition
    pub image_url: String,
    // Single unit of account (USD upstream); other currencies are out of scope
    pub price: f64,
    /// Position in the source feed, 0 = most popular
    pub rank: usize,
}

/// The text fields a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchableFields<'a> {
    pub name: &'a str,
    pub artist: &'a str,
    pub category: &'a str,
}

impl<'a> SearchableFields<'a> {
    pub fn get(&self, field: SearchField) -> &'a str {
        match field {
            SearchField::Name => self.name,
            SearchField::Artist => self.artist,
            SearchField::Category => self.category,
        }
    }
}

impl CatalogItem {
    pub fn searchable_fields(&self) -> SearchableFields<'_> {
        SearchableFields {
            name: &self.name,
            artist: &self.artist,
            category: &self.category,
        }
    }

    /// "Artist • Category" line shown under the title
    pub fn byline(&self) -> String {
        format!("{} • {}", self.artist, self.category)
    }

    /// Price formatted for a buy button
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}
