//! # Spotify Catalog
//!
//! A Rust client for the catalog endpoints of the Spotify Web API: albums,
//! artists, tracks, users and playlists, returned as typed models.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spotify_catalog::{Page, SpotifyApi, SpotifyError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = SpotifyApi::new("your_access_token")?;
//!
//!     // A single album, with its first page of tracks
//!     let album = api.get_album("4aawyAB9vmqN3uQ7FjRGTy").await?;
//!     println!("{} ({} tracks)", album.name, album.tracks.total);
//!
//!     // Explicit pagination
//!     let page = api.get_album_tracks(&album.id, Page::new(50, 0)).await?;
//!     println!("Next page at {:?}", page.next_offset);
//!
//!     // Expired tokens are reported, never retried
//!     match api.get_current_user().await {
//!         Err(SpotifyError::AccessTokenExpired) => api.set_access_token("fresh_token").await,
//!         other => println!("{:?}", other?),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! - [`api`] - the [`SpotifyApi`] façade and the [`Transport`] seam
//! - [`hydrator`] - JSON to model mapping, composed per operation
//! - [`models`] - the entities returned to callers

pub mod api;
pub mod config;
pub mod error;
pub mod hydrator;
pub mod models;

pub use api::{ApiRequest, HttpTransport, Page, SpotifyApi, Transport, TransportError};
pub use config::ApiConfig;
pub use error::{Result, SpotifyError};
pub use models::{
    Album, AlbumCollection, AlbumPagination, Artist, ArtistCollection, Collection, Image,
    Pagination, Playlist, PlaylistPagination, PlaylistTrack, PlaylistTrackPagination, Track,
    TrackCollection, TrackPagination, User,
};
