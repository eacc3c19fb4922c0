// iTunes RSS "top albums" JSON models
// Shape as served by https://itunes.apple.com/{country}/rss/topalbums/limit={n}/json
//
// Every field is optional here. Required-ness is checked by the mapper so a
// missing field is reported with its entry index instead of as a JSON error.

use serde::{Deserialize, Serialize};

use super::mapper::FeedShapeError;

// Response envelope
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawFeedDocument {
    #[serde(default)]
    pub feed: Option<RawFeed>,
}

impl RawFeedDocument {
    /// Parse a feed document; JSON that does not fit the schema at all is
    /// reported as a shape error.
    pub fn from_json(text: &str) -> Result<Self, FeedShapeError> {
        serde_json::from_str(text).map_err(|e| FeedShapeError::Malformed(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawFeed {
    /// Always a JSON array upstream; a missing key is a shape error
    #[serde(default)]
    pub entry: Option<Vec<RawEntry>>,
    #[serde(default)]
    pub updated: Option<Label>,
    #[serde(default)]
    pub title: Option<Label>,
}

impl RawFeed {
    pub fn entry_count(&self) -> usize {
        self.entry.as_ref().map_or(0, Vec::len)
    }
}

// Shared primitive: most values are wrapped as { "label": ... }
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(rename = "im:name", default)]
    pub name: Option<Label>,
    #[serde(rename = "im:artist", default)]
    pub artist: Option<Label>,
    #[serde(default)]
    pub category: Option<RawCategory>,
    #[serde(rename = "im:image", default)]
    pub images: Option<Vec<RawImage>>,
    #[serde(rename = "im:price", default)]
    pub price: Option<RawPrice>,
    #[serde(default)]
    pub id: Option<RawId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub attributes: Option<CategoryAttributes>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryAttributes {
    #[serde(default)]
    pub label: Option<String>, // "Country"
    #[serde(default)]
    pub term: Option<String>,
    #[serde(rename = "im:id", default)]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawImage {
    #[serde(default)]
    pub label: Option<String>, // image URL
    #[serde(default)]
    pub attributes: Option<ImageAttributes>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageAttributes {
    #[serde(default)]
    pub height: Option<String>, // "55", "60", "170"
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawPrice {
    #[serde(default)]
    pub label: Option<String>, // "$6.45"
    #[serde(default)]
    pub attributes: Option<PriceAttributes>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceAttributes {
    #[serde(default)]
    pub amount: Option<String>, // "6.45000"
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawId {
    #[serde(default)]
    pub label: Option<String>, // album URL
    #[serde(default)]
    pub attributes: Option<IdAttributes>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IdAttributes {
    #[serde(rename = "im:id", default)]
    pub im_id: Option<String>,
}
