//! Free-text search over the normalized catalog
//!
//! An item is kept when any configured text field, folded, contains the
//! folded term as a contiguous substring. Order is never changed.

use super::text_folder::TextFolder;
use crate::modules::catalog::domain::{entities::CatalogItem, value_objects::SearchField};
use crate::shared::errors::{AppError, AppResult};

pub struct SearchFilter {
    fields: Vec<SearchField>,
    folder: TextFolder,
}

impl SearchFilter {
    /// Create a filter over the given fields (duplicates collapse)
    pub fn new(fields: &[SearchField]) -> AppResult<Self> {
        let mut unique: Vec<SearchField> = Vec::with_capacity(fields.len());
        for field in fields {
            if !unique.contains(field) {
                unique.push(*field);
            }
        }

        if unique.is_empty() {
            return Err(AppError::InvalidInput(
                "search filter needs at least one field".to_string(),
            ));
        }

        Ok(Self {
            fields: unique,
            folder: TextFolder::search_pipeline(),
        })
    }

    /// Create a filter from configured field names, e.g. `"name,artist"`.
    /// A non-textual field name fails with `ContractViolation`.
    pub fn from_names(names: &str) -> AppResult<Self> {
        Self::new(&SearchField::parse_list(names)?)
    }

    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    /// Fold a term the same way field values are folded
    pub fn fold_term(&self, term: &str) -> String {
        self.folder.fold(term)
    }

    /// Whether any searched field of `item` contains the already-folded term
    pub fn matches(&self, item: &CatalogItem, folded_term: &str) -> bool {
        let values = item.searchable_fields();
        self.fields
            .iter()
            .any(|field| self.folder.fold(values.get(*field)).contains(folded_term))
    }

    /// Keep the items matching `term`, preserving input order.
    /// An empty term keeps everything.
    pub fn apply<'a, I>(&self, items: I, term: &str) -> Vec<&'a CatalogItem>
    where
        I: IntoIterator<Item = &'a CatalogItem>,
    {
        if term.is_empty() {
            return items.into_iter().collect();
        }

        let folded_term = self.fold_term(term);
        items
            .into_iter()
            .filter(|item| self.matches(item, &folded_term))
            .collect()
    }
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            fields: SearchField::ALL.to_vec(),
            folder: TextFolder::search_pipeline(),
        }
    }
}

/// Search name, artist and category for `term`
pub fn filter<'a, I>(items: I, term: &str) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    SearchFilter::default().apply(items, term)
}
