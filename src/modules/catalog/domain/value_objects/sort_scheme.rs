use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Numeric key the visible list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Feed position, 0 = most popular
    Rank,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// How the visible list is ordered: a (key, direction) pair
///
/// A selector only deals in primitive option values (`"rank-asc"`, ...); they
/// are decoded once at the boundary through `FromStr` / serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SortScheme {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortScheme {
    pub const RANK_ASCENDING: SortScheme = SortScheme::new(SortKey::Rank, SortDirection::Ascending);
    pub const RANK_DESCENDING: SortScheme =
        SortScheme::new(SortKey::Rank, SortDirection::Descending);
    pub const PRICE_ASCENDING: SortScheme =
        SortScheme::new(SortKey::Price, SortDirection::Ascending);
    pub const PRICE_DESCENDING: SortScheme =
        SortScheme::new(SortKey::Price, SortDirection::Descending);

    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Every scheme in selector order
    pub fn options() -> [SortScheme; 4] {
        [
            Self::RANK_ASCENDING,
            Self::RANK_DESCENDING,
            Self::PRICE_ASCENDING,
            Self::PRICE_DESCENDING,
        ]
    }

    /// Primitive value a selector option carries
    pub fn option_value(&self) -> &'static str {
        match (self.key, self.direction) {
            (SortKey::Rank, SortDirection::Ascending) => "rank-asc",
            (SortKey::Rank, SortDirection::Descending) => "rank-desc",
            (SortKey::Price, SortDirection::Ascending) => "price-asc",
            (SortKey::Price, SortDirection::Descending) => "price-desc",
        }
    }

    /// Human label for a selector option. Low rank is high popularity,
    /// so rank ascending reads "high to low".
    pub fn label(&self) -> &'static str {
        match (self.key, self.direction) {
            (SortKey::Rank, SortDirection::Ascending) => "Popularity, high to low",
            (SortKey::Rank, SortDirection::Descending) => "Popularity, low to high",
            (SortKey::Price, SortDirection::Ascending) => "Price, low to high",
            (SortKey::Price, SortDirection::Descending) => "Price, high to low",
        }
    }

    pub fn is_descending(&self) -> bool {
        self.direction == SortDirection::Descending
    }
}

impl Default for SortScheme {
    fn default() -> Self {
        Self::RANK_ASCENDING
    }
}

impl FromStr for SortScheme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        Self::options()
            .into_iter()
            .find(|scheme| scheme.option_value() == value)
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "unknown sort scheme '{}', expected one of: rank-asc, rank-desc, price-asc, price-desc",
                    s.trim()
                ))
            })
    }
}

impl TryFrom<String> for SortScheme {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortScheme> for String {
    fn from(scheme: SortScheme) -> Self {
        scheme.option_value().to_string()
    }
}

impl fmt::Display for SortScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.option_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_most_popular_first() {
        assert_eq!(SortScheme::default(), SortScheme::RANK_ASCENDING);
    }

    #[test]
    fn test_option_values_decode() {
        for scheme in SortScheme::options() {
            let decoded: SortScheme = scheme.option_value().parse().unwrap();
            assert_eq!(decoded, scheme);
        }
        assert_eq!(
            "PRICE-DESC".parse::<SortScheme>().unwrap(),
            SortScheme::PRICE_DESCENDING
        );
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert!(matches!(
            "name-asc".parse::<SortScheme>(),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_popularity_labels() {
        assert_eq!(SortScheme::RANK_DESCENDING.label(), "Popularity, low to high");
        assert_eq!(SortScheme::RANK_ASCENDING.label(), "Popularity, high to low");
    }

    #[test]
    fn test_serde_uses_option_value() {
        let json = serde_json::to_string(&SortScheme::PRICE_ASCENDING).unwrap();
        assert_eq!(json, "\"price-asc\"");
        let scheme: SortScheme = serde_json::from_str("\"rank-desc\"").unwrap();
        assert_eq!(scheme, SortScheme::RANK_DESCENDING);
        assert!(serde_json::from_str::<SortScheme>("\"sideways\"").is_err());
    }
}
