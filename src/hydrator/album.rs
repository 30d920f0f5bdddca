//! Album hydration.

use serde_json::Value;

use super::artist::artist_list;
use super::image::image_list;
use super::source::{optional_object, optional_str, required_id, required_str};
use super::{Batched, Hydrate, Hydrator};
use crate::error::Result;
use crate::models::{Album, Track};

/// Copy album scalars: `id`, `name`, `album_type`, `release_date`.
pub fn base(source: &Value, album: &mut Album) -> Result<()> {
    album.id = required_id(source, "id")?;
    album.name = required_str(source, "name")?;
    album.album_type = optional_str(source, "album_type")?;
    album.release_date = optional_str(source, "release_date")?;
    Ok(())
}

/// Embedded albums and batch entries skip the nested track page.
impl Hydrate for Album {
    const HYDRATORS: &'static [Hydrator<Self>] =
        &[base, artist_list::<Album>, image_list::<Album>];
}

impl Batched for Album {
    const COLLECTION_KEY: &'static str = "albums";
}

/// Hydrate the album a track belongs to from the embedded `album` object.
pub fn album_ref(source: &Value, track: &mut Track) -> Result<()> {
    track.album = optional_object(source, "album")?
        .map(Album::from_json)
        .transpose()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_album() {
        let json = json!({
            "id": "4aawyAB9vmqN3uQ7FjRGTy",
            "name": "Global Warming",
            "album_type": "album",
            "release_date": "2012-11-16",
            "artists": [{ "id": "0TnOYISbd1XYRBk9myaseg", "name": "Pitbull" }],
            "images": [{ "url": "http://example.com/cover.jpg", "width": 640, "height": 640 }]
        });

        let album = Album::from_json(&json).unwrap();
        assert_eq!(album.id, "4aawyAB9vmqN3uQ7FjRGTy");
        assert_eq!(album.name, "Global Warming");
        assert_eq!(album.album_type.as_deref(), Some("album"));
        assert_eq!(album.release_date.as_deref(), Some("2012-11-16"));
        assert_eq!(album.primary_artist(), Some("Pitbull"));
        assert_eq!(album.images.len(), 1);
    }

    #[test]
    fn test_album_ref() {
        let json = json!({
            "album": { "id": "al1", "name": "Referenced", "tracks": { "items": [{ "id": "x" }] } }
        });

        let mut track = Track::default();
        album_ref(&json, &mut track).unwrap();

        let album = track.album.unwrap();
        assert_eq!(album.id, "al1");
        assert!(album.tracks.items.is_empty());
    }

    #[test]
    fn test_album_ref_absent() {
        let mut track = Track::default();
        album_ref(&json!({}), &mut track).unwrap();
        assert!(track.album.is_none());
    }

    #[test]
    fn test_album_ref_without_id_fails() {
        let json = json!({ "album": { "name": "No id" } });
        let mut track = Track::default();
        assert!(album_ref(&json, &mut track).is_err());
    }
}
