use super::models::*;
use crate::modules::catalog::domain::entities::CatalogItem;
use thiserror::Error;

/// Height, in pixels, of the image rendition shown on a catalog card
pub const CATALOG_IMAGE_HEIGHT: u32 = 170;

// Heights are matched as declared, without numeric parsing
const CATALOG_IMAGE_HEIGHT_LABEL: &str = "170";

/// The feed did not have the shape normalization requires
///
/// Any one bad entry aborts the whole feed; no partial list is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedShapeError {
    #[error("feed document has no `feed` object")]
    MissingFeed,

    #[error("feed has no `entry` list")]
    MissingEntries,

    #[error("entry {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("entry {index}: no image rendition with height {height}")]
    NoImageRendition { index: usize, height: u32 },

    #[error("entry {index}: invalid price amount '{amount}'")]
    InvalidPrice { index: usize, amount: String },

    #[error("malformed feed document: {0}")]
    Malformed(String),
}

/// Converts a provider's raw entries into catalog items
pub trait CatalogMapper<T> {
    /// Map one raw entry; `rank` is its zero-based position in the feed
    fn map_entry(&self, source: &T, rank: usize) -> Result<CatalogItem, FeedShapeError>;

    /// Map entries in order, ranking each by position
    fn map_entries(&self, sources: &[T]) -> Result<Vec<CatalogItem>, FeedShapeError> {
        sources
            .iter()
            .enumerate()
            .map(|(rank, source)| self.map_entry(source, rank))
            .collect()
    }
}

/// iTunes top-albums mapper
#[derive(Debug, Clone, Default)]
pub struct ITunesMapper;

impl ITunesMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map a whole feed document. Both `feed` and its `entry` list must be present.
    pub fn map_feed(&self, document: &RawFeedDocument) -> Result<Vec<CatalogItem>, FeedShapeError> {
        let feed = document.feed.as_ref().ok_or(FeedShapeError::MissingFeed)?;
        let entries = feed.entry.as_deref().ok_or(FeedShapeError::MissingEntries)?;
        let items = self.map_entries(entries)?;
        log::debug!("iTunes: normalized {} feed entries", items.len());
        Ok(items)
    }

    fn required<'a>(
        value: Option<&'a String>,
        index: usize,
        field: &'static str,
    ) -> Result<&'a str, FeedShapeError> {
        value
            .map(String::as_str)
            .ok_or(FeedShapeError::MissingField { index, field })
    }

    /// First rendition whose declared height is exactly `CATALOG_IMAGE_HEIGHT`
    fn select_image_url(images: Option<&Vec<RawImage>>, index: usize) -> Result<String, FeedShapeError> {
        let matching = images
            .into_iter()
            .flatten()
            .find(|image| {
                image
                    .attributes
                    .as_ref()
                    .and_then(|attrs| attrs.height.as_deref())
                    == Some(CATALOG_IMAGE_HEIGHT_LABEL)
            })
            .ok_or(FeedShapeError::NoImageRendition {
                index,
                height: CATALOG_IMAGE_HEIGHT,
            })?;

        Self::required(matching.label.as_ref(), index, "im:image.label").map(str::to_string)
    }

    /// Parse the decimal amount ("6.45000"); must be finite and non-negative.
    /// Negative zero is stored as zero.
    fn parse_price(amount: &str, index: usize) -> Result<f64, FeedShapeError> {
        let invalid = || FeedShapeError::InvalidPrice {
            index,
            amount: amount.to_string(),
        };

        let price: f64 = amount.trim().parse().map_err(|_| invalid())?;
        if !price.is_finite() || price < 0.0 {
            return Err(invalid());
        }
        // "-0.00" parses to -0.0, which `total_cmp` orders before 0.0
        Ok(if price == 0.0 { 0.0 } else { price })
    }
}

impl CatalogMapper<RawEntry> for ITunesMapper {
    fn map_entry(&self, entry: &RawEntry, rank: usize) -> Result<CatalogItem, FeedShapeError> {
        let index = rank;

        let name = Self::required(
            entry.name.as_ref().and_then(|n| n.label.as_ref()),
            index,
            "im:name.label",
        )?;
        let artist = Self::required(
            entry.artist.as_ref().and_then(|a| a.label.as_ref()),
            index,
            "im:artist.label",
        )?;
        let category = Self::required(
            entry
                .category
                .as_ref()
                .and_then(|c| c.attributes.as_ref())
                .and_then(|attrs| attrs.label.as_ref()),
            index,
            "category.attributes.label",
        )?;
        let image_url = Self::select_image_url(entry.images.as_ref(), index)?;
        let amount = Self::required(
            entry
                .price
                .as_ref()
                .and_then(|p| p.attributes.as_ref())
                .and_then(|attrs| attrs.amount.as_ref()),
            index,
            "im:price.attributes.amount",
        )?;
        let price = Self::parse_price(amount, index)?;
        let id = Self::required(
            entry
                .id
                .as_ref()
                .and_then(|id| id.attributes.as_ref())
                .and_then(|attrs| attrs.im_id.as_ref()),
            index,
            "id.attributes.im:id",
        )?;

        Ok(CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            artist: artist.to_string(),
            category: category.to_string(),
            image_url,
            price,
            rank,
        })
    }
}

/// Normalize a raw feed into catalog items ranked by feed position
pub fn normalize(document: &RawFeedDocument) -> Result<Vec<CatalogItem>, FeedShapeError> {
    ITunesMapper::new().map_feed(document)
}

/// Parse and normalize feed JSON text
pub fn normalize_json(text: &str) -> Result<Vec<CatalogItem>, FeedShapeError> {
    normalize(&RawFeedDocument::from_json(text)?)
}
