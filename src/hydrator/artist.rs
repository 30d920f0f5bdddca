//! Artist hydration.

use serde_json::Value;

use super::image::image_list;
use super::source::{optional_array, optional_u32, required_id, required_str};
use super::{Batched, Hydrate, Hydrator};
use crate::error::{Result, SpotifyError};
use crate::models::{Album, Artist, Track};

/// Copy artist scalars: `id`, `name`, `genres`, `popularity`.
pub fn base(source: &Value, artist: &mut Artist) -> Result<()> {
    artist.id = required_id(source, "id")?;
    artist.name = required_str(source, "name")?;
    artist.genres = optional_array(source, "genres")?
        .iter()
        .map(|g| {
            g.as_str()
                .map(str::to_string)
                .ok_or_else(|| SpotifyError::mapping("genre entries should be strings"))
        })
        .collect::<Result<_>>()?;
    artist.popularity = optional_u32(source, "popularity")?;
    Ok(())
}

impl Hydrate for Artist {
    const HYDRATORS: &'static [Hydrator<Self>] = &[base, image_list::<Artist>];
}

impl Batched for Artist {
    const COLLECTION_KEY: &'static str = "artists";
}

/// Entity credited to a list of artists.
pub trait HasArtists {
    fn artists_mut(&mut self) -> &mut Vec<Artist>;
}

impl HasArtists for Album {
    fn artists_mut(&mut self) -> &mut Vec<Artist> {
        &mut self.artists
    }
}

impl HasArtists for Track {
    fn artists_mut(&mut self) -> &mut Vec<Artist> {
        &mut self.artists
    }
}

/// Read the embedded `artists` array.
pub fn artist_list<T: HasArtists>(source: &Value, target: &mut T) -> Result<()> {
    let artists = optional_array(source, "artists")?
        .iter()
        .map(Artist::from_json)
        .collect::<Result<Vec<_>>>()?;

    *target.artists_mut() = artists;
    Ok(())
}
