use std::cmp::Ordering;

use crate::modules::catalog::domain::{
    entities::CatalogItem,
    value_objects::{SortKey, SortScheme},
};

fn compare_by_key(a: &CatalogItem, b: &CatalogItem, key: SortKey) -> Ordering {
    match key {
        SortKey::Rank => a.rank.cmp(&b.rank),
        SortKey::Price => a.price.total_cmp(&b.price),
    }
}

/// Order items by the scheme's key
///
/// Always a stable ascending sort. Descending schemes reverse the whole
/// ascending result, so items with equal keys come out in reverse input order.
pub fn sort<'a, I>(items: I, scheme: SortScheme) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let mut sorted: Vec<&'a CatalogItem> = items.into_iter().collect();
    sorted.sort_by(|a, b| compare_by_key(a, b, scheme.key));

    if scheme.is_descending() {
        sorted.reverse();
    }

    sorted
}
