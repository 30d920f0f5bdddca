//! Fixed hydrator composition for each API operation.

use super::collection::collection;
use super::image::image_list;
use super::pagination::{nested_tracks, page_hydrators};
use super::{album, artist, playlist, track, user, AggregateHydrator, Batched, Hydrate, Hydrator};
use crate::models::{Album, Artist, Collection, Pagination, Playlist, Track, User};

const ALBUM: &[Hydrator<Album>] = &[
    album::base,
    artist::artist_list::<Album>,
    image_list::<Album>,
    nested_tracks::<Album>,
];

const ARTIST: &[Hydrator<Artist>] = &[artist::base, image_list::<Artist>];

const TRACK: &[Hydrator<Track>] = &[track::base, album::album_ref, artist::artist_list::<Track>];

const PLAYLIST: &[Hydrator<Playlist>] = &[
    playlist::base,
    image_list::<Playlist>,
    playlist::owner_ref,
    nested_tracks::<Playlist>,
];

const USER: &[Hydrator<User>] = &[user::base, image_list::<User>];

/// `get_album`: base, artists, images, nested track page.
pub fn album() -> AggregateHydrator<Album> {
    AggregateHydrator::from(ALBUM)
}

/// `get_artist`: base, images.
pub fn artist() -> AggregateHydrator<Artist> {
    AggregateHydrator::from(ARTIST)
}

/// `get_track`: base, album reference, artists.
pub fn track() -> AggregateHydrator<Track> {
    AggregateHydrator::from(TRACK)
}

/// `get_playlist`: base, images, owner reference, nested entry page.
pub fn playlist() -> AggregateHydrator<Playlist> {
    AggregateHydrator::from(PLAYLIST)
}

/// `get_user_profile` and `get_current_user`: base, images.
pub fn user() -> AggregateHydrator<User> {
    AggregateHydrator::from(USER)
}

/// Multi-id lookups and other batch responses.
pub fn collection_of<T: Batched>() -> AggregateHydrator<Collection<T>> {
    let mut hydrators = AggregateHydrator::new();
    hydrators.add(collection::<T>);
    hydrators
}

/// Paginated responses: envelope first, then items.
pub fn pagination_of<T: Hydrate>() -> AggregateHydrator<Pagination<T>> {
    AggregateHydrator::from(&page_hydrators::<T>()[..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpotifyError;
    use crate::models::PlaylistTrack;
    use serde_json::json;

    #[test]
    fn test_album_scenario() {
        let json = json!({
            "id": "abc",
            "name": "X",
            "artists": [{ "id": "a1", "name": "A" }],
            "images": [],
            "tracks": { "items": [], "total": 0, "limit": 20, "offset": 0 }
        });

        let album = album().hydrate_default(&json).unwrap();
        assert_eq!(album.id, "abc");
        assert_eq!(album.name, "X");
        assert_eq!(album.artists.len(), 1);
        assert_eq!(album.artists[0].id, "a1");
        assert!(album.images.is_empty());
        assert!(album.tracks.items.is_empty());
        assert_eq!(album.tracks.total, 0);
        assert_eq!(album.tracks.limit, 20);
    }

    #[test]
    fn test_album_with_tracks() {
        let json = json!({
            "id": "abc",
            "name": "X",
            "tracks": {
                "items": [
                    { "id": "t1", "name": "One", "artists": [{ "id": "a1", "name": "A" }] },
                    { "id": "t2", "name": "Two" }
                ],
                "total": 2,
                "limit": 50,
                "offset": 0,
                "next": null
            }
        });

        let album = album().hydrate_default(&json).unwrap();
        assert_eq!(album.tracks.len(), 2);
        assert_eq!(album.tracks.items[1].id, "t2");
        assert!(album.tracks.items[0].album.is_none());
    }

    #[test]
    fn test_album_missing_id() {
        let json = json!({ "name": "X", "images": [] });
        let err = album().hydrate_default(&json).unwrap_err();
        assert!(matches!(err, SpotifyError::Mapping(_)));
    }

    #[test]
    fn test_album_nested_page_error_propagates() {
        let json = json!({
            "id": "abc",
            "name": "X",
            "tracks": { "items": [], "limit": 20, "offset": 0 }
        });
        assert!(album().hydrate_default(&json).is_err());
    }

    #[test]
    fn test_artist_composition() {
        let json = json!({
            "id": "ar1",
            "name": "Artist",
            "images": [{ "url": "http://example.com/a.jpg", "width": 160, "height": 160 }]
        });

        let artist = artist().hydrate_default(&json).unwrap();
        assert_eq!(artist.name, "Artist");
        assert_eq!(artist.largest_image().unwrap().width, Some(160));
    }

    #[test]
    fn test_track_composition() {
        let json = json!({
            "id": "t1",
            "name": "Song",
            "album": { "id": "al1", "name": "Record", "images": [] },
            "artists": [{ "id": "a1", "name": "A" }, { "id": "a2", "name": "B" }]
        });

        let track = track().hydrate_default(&json).unwrap();
        assert_eq!(track.album.as_ref().unwrap().id, "al1");
        assert_eq!(track.artists_string(" & "), "A & B");
    }

    #[test]
    fn test_playlist_composition() {
        let json = json!({
            "id": "p1",
            "name": "Mix",
            "collaborative": true,
            "owner": { "id": "u1", "display_name": "Owner" },
            "images": [{ "url": "http://example.com/mosaic.jpg", "width": 640, "height": 640 }],
            "tracks": {
                "items": [
                    { "added_at": "2020-01-01T00:00:00Z", "added_by": { "id": "u1" }, "track": { "id": "t1", "name": "One" } },
                    { "added_at": null, "added_by": null, "track": null }
                ],
                "total": 150,
                "limit": 100,
                "offset": 0,
                "next": "https://api.spotify.com/v1/users/u1/playlists/p1/tracks?offset=100&limit=100"
            }
        });

        let playlist = playlist().hydrate_default(&json).unwrap();
        assert!(playlist.collaborative);
        assert_eq!(playlist.owner.as_ref().unwrap().name(), "Owner");
        assert_eq!(playlist.images.len(), 1);
        assert_eq!(playlist.tracks.total, 150);
        assert_eq!(playlist.tracks.next_offset, Some(100));
        assert_eq!(playlist.tracks().count(), 1);
    }

    #[test]
    fn test_user_composition() {
        let json = json!({ "id": "u1", "display_name": "Someone", "images": [] });
        let user = user().hydrate_default(&json).unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Someone"));
        assert!(user.images.is_empty());
    }

    #[test]
    fn test_collection_of_tracks() {
        let json = json!({
            "tracks": [
                { "id": "t1", "name": "One", "album": { "id": "al1", "name": "Record" } },
                { "id": "t2", "name": "Two" }
            ]
        });

        let tracks = collection_of::<Track>().hydrate_default(&json).unwrap();
        let ids: Vec<_> = tracks.items.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
    }

    #[test]
    fn test_pagination_of_playlists() {
        let json = json!({
            "items": [
                { "id": "p1", "name": "First", "owner": { "id": "u1" }, "tracks": { "total": 3 } },
                { "id": "p2", "name": "Second", "owner": { "id": "u1" }, "tracks": { "total": 7 } }
            ],
            "total": 2,
            "limit": 20,
            "offset": 0,
            "next": null
        });

        let page = pagination_of::<Playlist>().hydrate_default(&json).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.items[1].tracks.total, 7);
        assert!(!page.has_next());
    }

    #[test]
    fn test_pagination_of_playlist_tracks() {
        let json = json!({
            "items": [{ "added_at": "2020-01-01T00:00:00Z", "track": { "id": "t1", "name": "One" } }],
            "total": 1,
            "limit": 100,
            "offset": 0
        });

        let page = pagination_of::<PlaylistTrack>().hydrate_default(&json).unwrap();
        assert_eq!(page.items[0].track.as_ref().unwrap().id, "t1");
    }

    #[test]
    fn test_same_fixture_twice_is_equal() {
        let json = json!({
            "id": "abc",
            "name": "X",
            "artists": [{ "id": "a1", "name": "A" }],
            "images": [],
            "tracks": { "items": [], "total": 0, "limit": 20, "offset": 0 }
        });

        let hydrators = album();
        let first = hydrators.hydrate_default(&json).unwrap();
        let mut second = hydrators.hydrate_default(&json).unwrap();
        assert_eq!(first, second);

        second.artists.clear();
        assert_eq!(first.artists.len(), 1);
    }
}
