//! Album types

use super::AlbumId;
use serde::{Deserialize, Serialize};

/// A stored album record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub entity_id: AlbumId,
    pub artist: String,
    pub owner: Option<String>,
    pub title: String,
    pub condition: i64,
    pub format: String,
    pub comments: String,
    pub price: i64,
    pub for_sale: bool,
}

/// Validated data for creating a new album
///
/// Produced by [`crate::validation::AlbumInput::into_new_album`]; every numeric
/// field has already been coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlbum {
    pub artist: String,
    pub owner: Option<String>,
    pub title: String,
    pub condition: i64,
    pub format: String,
    pub comments: String,
    pub price: i64,
    pub for_sale: bool,
}

impl NewAlbum {
    /// Attach a store-assigned ID
    pub fn with_id(self, entity_id: AlbumId) -> Album {
        Album {
            entity_id,
            artist: self.artist,
            owner: self.owner,
            title: self.title,
            condition: self.condition,
            format: self.format,
            comments: self.comments,
            price: self.price,
            for_sale: self.for_sale,
        }
    }
}

/// Validated partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumPatch {
    pub artist: Option<String>,
    pub owner: Option<String>,
    pub title: Option<String>,
    pub condition: Option<i64>,
    pub format: Option<String>,
    pub comments: Option<String>,
    pub price: Option<i64>,
    pub for_sale: Option<bool>,
}

impl AlbumPatch {
    /// Shallow-merge the patch over an existing album
    pub fn apply_to(self, album: &mut Album) {
        if let Some(artist) = self.artist {
            album.artist = artist;
        }
        if let Some(owner) = self.owner {
            album.owner = Some(owner);
        }
        if let Some(title) = self.title {
            album.title = title;
        }
        if let Some(condition) = self.condition {
            album.condition = condition;
        }
        if let Some(format) = self.format {
            album.format = format;
        }
        if let Some(comments) = self.comments {
            album.comments = comments;
        }
        if let Some(price) = self.price {
            album.price = price;
        }
        if let Some(for_sale) = self.for_sale {
            album.for_sale = for_sale;
        }
    }

    /// True when the patch would change nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
