//! Playlist models.
//!
//! A playlist's tracks are wrapped in [`PlaylistTrack`] entries that record
//! who added each track and when.

use serde::{Deserialize, Serialize};

use super::common::{Image, Pagination};
use super::track::Track;
use super::user::User;

/// Playlist as returned by the catalog.
///
/// Playlists listed in a user's playlist page carry no `tracks` items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    /// Spotify playlist ID.
    pub id: String,

    /// Playlist name.
    pub name: String,

    /// Description as entered by the owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Public/private status; null when not relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    /// Whether other users may modify the playlist.
    #[serde(default)]
    pub collaborative: bool,

    /// Owner of the playlist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,

    /// Mosaic or uploaded cover images.
    #[serde(default)]
    pub images: Vec<Image>,

    /// First page of playlist entries.
    #[serde(default)]
    pub tracks: PlaylistTrackPagination,
}

/// One entry of a playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistTrack {
    /// ISO 8601 timestamp; null for very old playlists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,

    /// User who added the track; null for very old playlists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<User>,

    /// The track itself; null when it was removed from the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<Track>,
}

/// Page of playlist entries.
pub type PlaylistTrackPagination = Pagination<PlaylistTrack>;

/// Page of playlists, e.g. a user's playlists.
pub type PlaylistPagination = Pagination<Playlist>;

impl Playlist {
    /// Tracks on this page, skipping entries whose track is gone.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.items.iter().filter_map(|entry| entry.track.as_ref())
    }
}
