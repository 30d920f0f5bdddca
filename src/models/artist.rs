//! Artist model.

use serde::{Deserialize, Serialize};

use super::common::{largest_image, Collection, Image};

/// Artist as returned by the catalog.
///
/// When nested inside a track or album only `id` and `name` are
/// populated; `genres`, `popularity` and `images` need a direct fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Spotify artist ID.
    pub id: String,

    /// Artist name.
    pub name: String,

    /// Genres the artist is associated with.
    #[serde(default)]
    pub genres: Vec<String>,

    /// Popularity from 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,

    /// Artist pictures, widest first.
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Artist {
    /// Create an artist with just a name and ID.
    pub fn new<S1: Into<String>, S2: Into<String>>(id: S1, name: S2) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Get the largest picture available.
    pub fn largest_image(&self) -> Option<&Image> {
        largest_image(&self.images)
    }
}

/// Batch of artists from a multi-id lookup or related-artists query.
pub type ArtistCollection = Collection<Artist>;

/// Join artist names with a separator.
pub fn join_names(artists: &[Artist], separator: &str) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
