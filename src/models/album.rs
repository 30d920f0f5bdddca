//! Album model.

use serde::{Deserialize, Serialize};

use super::artist::{join_names, Artist};
use super::common::{largest_image, Collection, Image, Pagination};
use super::track::TrackPagination;

/// Album as returned by the catalog.
///
/// An album embedded in a track carries no `tracks` page; only a direct
/// album fetch fills it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Spotify album ID.
    pub id: String,

    /// Album name.
    pub name: String,

    /// "album", "single" or "compilation".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_type: Option<String>,

    /// Release date with the precision the API provides ("2011", "2011-05", "2011-05-23").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    /// Album artists.
    #[serde(default)]
    pub artists: Vec<Artist>,

    /// Cover art in various sizes.
    #[serde(default)]
    pub images: Vec<Image>,

    /// First page of tracks.
    #[serde(default)]
    pub tracks: TrackPagination,
}

impl Album {
    /// Get the primary artist name.
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }

    /// Get all artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        join_names(&self.artists, separator)
    }

    /// Get the largest cover image available.
    pub fn largest_image(&self) -> Option<&Image> {
        largest_image(&self.images)
    }
}

/// Batch of albums from a multi-id lookup.
pub type AlbumCollection = Collection<Album>;

/// Page of albums, e.g. an artist's discography.
pub type AlbumPagination = Pagination<Album>;
