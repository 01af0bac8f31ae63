//! Models for the NASA library collection payload.
//!
//! The wire format nests everything under a `collection` key; each item
//! carries its metadata as a `data` *list* of which only the first element
//! is meaningful. Decoding is single-pass and strict: a missing required
//! field, an empty `data` list, an unknown media type or a malformed
//! `date_created` string all fail the whole document.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// The fixed format of `date_created` strings, interpreted as UTC.
pub const LONG_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Top-level document returned by every library query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpaceLibraryItems {
    pub collection: Collection,
}

/// One page of library results.
///
/// `space_items` keeps response order; pagination appends pages without
/// reordering or deduplicating.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Collection {
    pub version: String,
    pub href: String,
    #[serde(rename = "items")]
    pub space_items: Vec<SpaceItem>,
    #[serde(default)]
    pub links: Option<Vec<CollectionLink>>,
}

/// One media asset plus its metadata and links.
///
/// The server sends metadata as a list of [`SpaceItemData`] with at least
/// one element; decoding takes the first and discards the rest. An empty
/// list is a decode error, not a panic.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceItem {
    /// Collection-document URL for this item's assets; stable identifier proxy.
    pub href: String,
    pub data: SpaceItemData,
    pub links: Vec<ItemLink>,
}

impl<'de> Deserialize<'de> for SpaceItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            href: String,
            data: Vec<SpaceItemData>,
            #[serde(default)]
            links: Option<Vec<ItemLink>>,
        }

        let wire = Wire::deserialize(deserializer)?;
        let mut data = wire.data;
        if data.is_empty() {
            return Err(de::Error::custom(format!(
                "item {} has an empty data list",
                wire.href
            )));
        }

        Ok(SpaceItem {
            href: wire.href,
            data: data.swap_remove(0),
            links: wire.links.unwrap_or_default(),
        })
    }
}

/// Metadata for one library item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpaceItemData {
    pub title: String,
    pub nasa_id: String,
    pub media_type: MediaType,
    #[serde(deserialize_with = "deserialize_long_date")]
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub album: Option<Vec<String>>,
    #[serde(default)]
    pub secondary_creator: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photographer: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub center: Option<String>,
}

/// Media type of a library item. Any other wire value fails decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
}

impl MediaType {
    /// The raw wire value, as used in the `media_type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link attached to one item, e.g. the `preview` or `orig` asset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemLink {
    pub href: String,
    pub rel: String,
    #[serde(default)]
    pub render: Option<MediaType>,
}

/// A navigation link on the collection itself (e.g. `next`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionLink {
    pub rel: String,
    pub prompt: String,
    pub href: String,
}

/// Parse a `date_created` string against [`LONG_DATE_FORMAT`].
///
/// The error names both the offending input and the expected format so a
/// decode failure in the field is diagnosable from the message alone.
fn deserialize_long_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, LONG_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            de::Error::custom(format!(
                "date string {} does not match expected format {}",
                raw, LONG_DATE_FORMAT
            ))
        })
}
