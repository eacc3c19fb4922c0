use serde::Serialize;

use super::{search_filter::SearchFilter, sorter::sort};
use crate::modules::catalog::domain::{entities::CatalogItem, value_objects::SortScheme};
use crate::shared::utils::LogContext;

/// What a display collaborator renders: the visible list plus the size of
/// the whole normalized catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView<'a> {
    pub items: Vec<&'a CatalogItem>,
    /// Pre-filter count for the "Top N" summary; searching never changes it
    pub total_count: usize,
}

impl<'a> CatalogView<'a> {
    pub fn visible_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_owned(self) -> Vec<CatalogItem> {
        self.items.into_iter().cloned().collect()
    }
}

/// Search filter followed by sort, re-run on every input change
///
/// Filtering happens first so sort stability is relative to feed rank.
pub struct ItemPipeline {
    filter: SearchFilter,
}

impl ItemPipeline {
    pub fn new(filter: SearchFilter) -> Self {
        Self { filter }
    }

    pub fn search_filter(&self) -> &SearchFilter {
        &self.filter
    }

    pub fn run<'a>(&self, items: &'a [CatalogItem], term: &str, scheme: SortScheme) -> CatalogView<'a> {
        let filtered = self.filter.apply(items, term);
        LogContext::catalog_search(term, items.len(), filtered.len());

        CatalogView {
            items: sort(filtered, scheme),
            total_count: items.len(),
        }
    }
}

impl Default for ItemPipeline {
    fn default() -> Self {
        Self::new(SearchFilter::default())
    }
}

/// Run the default pipeline (all text fields searched)
pub fn apply<'a>(items: &'a [CatalogItem], term: &str, scheme: SortScheme) -> CatalogView<'a> {
    ItemPipeline::default().run(items, term, scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(rank: usize, name: &str, category: &str, price: f64) -> CatalogItem {
        CatalogItem {
            id: rank.to_string(),
            name: name.to_string(),
            artist: "Various Artists".to_string(),
            category: category.to_string(),
            image_url: String::new(),
            price,
            rank,
        }
    }

    fn catalog() -> Vec<CatalogItem> {
        vec![
            item(0, "& - EP", "Country", 4.99),
            item(1, "Midnights", "Pop", 11.99),
            item(2, "Country Stuff The Album", "Country", 9.99),
        ]
    }

    #[test]
    fn test_filter_then_sort() {
        let items = catalog();
        let view = apply(&items, "country", SortScheme::RANK_DESCENDING);
        let names: Vec<&str> = view.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Country Stuff The Album", "& - EP"]);
    }

    #[test]
    fn test_total_count_ignores_search() {
        let items = catalog();
        for term in ["", "country", "midnights", "nothing matches"] {
            let view = apply(&items, term, SortScheme::PRICE_ASCENDING);
            assert_eq!(view.total_count, 3);
            assert!(view.visible_count() <= view.total_count);
        }
        assert!(apply(&items, "nothing matches", SortScheme::default()).is_empty());
    }

    #[test]
    fn test_into_owned_keeps_order() {
        let items = catalog();
        let owned = apply(&items, "", SortScheme::PRICE_DESCENDING).into_owned();
        let ranks: Vec<usize> = owned.iter().map(|i| i.rank).collect();
        assert_eq!(ranks, vec![1, 2, 0]);
    }
}
