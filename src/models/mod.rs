//! Data models for catalog responses.
//!
//! This module contains the entities the hydrators build: albums,
//! artists, tracks, users, playlists, and the collection and pagination
//! wrappers around them.

pub mod album;
pub mod artist;
pub mod common;
pub mod playlist;
pub mod track;
pub mod user;

// Re-exports for convenience
pub use album::{Album, AlbumCollection, AlbumPagination};
pub use artist::{Artist, ArtistCollection};
pub use common::{Collection, Image, Pagination};
pub use playlist::{Playlist, PlaylistPagination, PlaylistTrack, PlaylistTrackPagination};
pub use track::{Track, TrackCollection, TrackPagination};
pub use user::User;
