//! Playlist and playlist entry hydration.

use serde_json::Value;

use super::image::image_list;
use super::pagination::nested_tracks;
use super::source::{optional_bool, optional_object, optional_str, required_id, required_str};
use super::user::user_ref;
use super::{Hydrate, Hydrator};
use crate::error::Result;
use crate::models::{Playlist, PlaylistTrack, Track};

/// Copy playlist scalars.
pub fn base(source: &Value, playlist: &mut Playlist) -> Result<()> {
    playlist.id = required_id(source, "id")?;
    playlist.name = required_str(source, "name")?;
    playlist.description = optional_str(source, "description")?;
    playlist.public = optional_bool(source, "public")?;
    playlist.collaborative = optional_bool(source, "collaborative")?.unwrap_or(false);
    Ok(())
}

/// Hydrate the embedded `owner` object.
pub fn owner_ref(source: &Value, playlist: &mut Playlist) -> Result<()> {
    playlist.owner = user_ref(source, "owner")?;
    Ok(())
}

/// Playlists listed in a page carry only a track summary, which fills
/// `tracks.total` and nothing else.
impl Hydrate for Playlist {
    const HYDRATORS: &'static [Hydrator<Self>] = &[
        base,
        image_list::<Playlist>,
        owner_ref,
        nested_tracks::<Playlist>,
    ];
}

/// Copy entry scalars: `added_at`.
pub fn entry_base(source: &Value, entry: &mut PlaylistTrack) -> Result<()> {
    entry.added_at = optional_str(source, "added_at")?;
    Ok(())
}

/// Hydrate the embedded `added_by` user.
pub fn added_by_ref(source: &Value, entry: &mut PlaylistTrack) -> Result<()> {
    entry.added_by = user_ref(source, "added_by")?;
    Ok(())
}

/// Hydrate the embedded `track`; null when the track left the catalog.
pub fn track_ref(source: &Value, entry: &mut PlaylistTrack) -> Result<()> {
    entry.track = optional_object(source, "track")?
        .map(Track::from_json)
        .transpose()?;
    Ok(())
}

impl Hydrate for PlaylistTrack {
    const HYDRATORS: &'static [Hydrator<Self>] = &[entry_base, added_by_ref, track_ref];
}
