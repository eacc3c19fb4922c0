use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::{AppError, AppResult};

/// A text field of `CatalogItem` that free-text search can match against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Name,
    Artist,
    Category,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Name, SearchField::Artist, SearchField::Category];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Artist => "artist",
            SearchField::Category => "category",
        }
    }

    /// Parse a comma-separated field list such as `"name, artist"`.
    /// Duplicates are dropped, first occurrence wins.
    pub fn parse_list(raw: &str) -> AppResult<Vec<SearchField>> {
        let mut fields = Vec::new();
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let field: SearchField = part.parse()?;
            if !fields.contains(&field) {
                fields.push(field);
            }
        }

        if fields.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one search field is required".to_string(),
            ));
        }
        Ok(fields)
    }
}

impl FromStr for SearchField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "artist" => Ok(SearchField::Artist),
            "category" => Ok(SearchField::Category),
            // Real CatalogItem fields, but not text a search term can match
            "price" | "rank" => Err(AppError::ContractViolation(format!(
                "field '{}' is not textual and cannot be searched",
                s.trim()
            ))),
            other => Err(AppError::InvalidInput(format!(
                "unknown search field '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
