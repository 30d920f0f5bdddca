//! Track hydration.

use serde_json::Value;

use super::album::album_ref;
use super::artist::artist_list;
use super::source::{optional_bool, optional_u32, optional_u64, required_id, required_str};
use super::{Batched, Hydrate, Hydrator};
use crate::error::Result;
use crate::models::Track;

/// Copy track scalars.
pub fn base(source: &Value, track: &mut Track) -> Result<()> {
    track.id = required_id(source, "id")?;
    track.name = required_str(source, "name")?;
    track.duration_ms = optional_u64(source, "duration_ms")?;
    track.track_number = optional_u32(source, "track_number")?;
    track.disc_number = optional_u32(source, "disc_number")?;
    track.explicit = optional_bool(source, "explicit")?.unwrap_or(false);
    Ok(())
}

impl Hydrate for Track {
    const HYDRATORS: &'static [Hydrator<Self>] = &[base, album_ref, artist_list::<Track>];
}

impl Batched for Track {
    const COLLECTION_KEY: &'static str = "tracks";
}
