//! Spotify catalog API façade.
//!
//! Each operation builds one request, sends it through the [`Transport`],
//! and runs the body through the hydrator composition for that operation.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use super::transport::{ApiRequest, HttpTransport, Transport};
use crate::config::ApiConfig;
use crate::error::{Result, SpotifyError};
use crate::hydrator::compose;
use crate::models::{
    Album, AlbumCollection, AlbumPagination, Artist, ArtistCollection, Playlist,
    PlaylistPagination, PlaylistTrack, PlaylistTrackPagination, Track, TrackCollection,
    TrackPagination, User,
};

/// Default page size.
pub const DEFAULT_LIMIT: u32 = 20;

/// Which slice of a paginated result to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// The page after this one.
    pub fn next(self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }
}

/// Query parameters, with list values joined by commas.
#[derive(Debug, Default)]
struct Query(Vec<(String, String)>);

impl Query {
    fn new() -> Self {
        Self::default()
    }

    fn push<V: ToString>(mut self, key: &str, value: V) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a filter, leaving it out when empty.
    fn push_non_empty(self, key: &str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.push(key, value)
        }
    }

    /// Add a comma-joined list, leaving it out when empty.
    fn push_list<S: AsRef<str>>(self, key: &str, values: &[S]) -> Self {
        let joined = join(values);
        self.push_non_empty(key, &joined)
    }

    fn page(self, page: Page) -> Self {
        self.push("limit", page.limit).push("offset", page.offset)
    }
}

fn join<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|v| v.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

fn require_ids<S: AsRef<str>>(ids: &[S]) -> Result<String> {
    if ids.is_empty() {
        return Err(SpotifyError::InvalidArgument(
            "at least one ID is required".into(),
        ));
    }
    Ok(join(ids))
}

/// Encode an ID so it fills exactly one path segment.
fn segment(value: &str) -> Result<String> {
    if matches!(value, "" | "." | "..") {
        return Err(SpotifyError::InvalidArgument(format!(
            "{:?} is not a valid ID",
            value
        )));
    }
    Ok(urlencoding::encode(value).into_owned())
}

/// Client for the Spotify catalog endpoints.
///
/// The bearer token can be replaced at any time with
/// [`set_access_token`](Self::set_access_token). Each request reads the
/// token once when it is built, so a request already in flight keeps the
/// old token and the last write wins for everything after it. Clones
/// share the same token.
///
/// # Example
///
/// ```rust,no_run
/// use spotify_catalog::SpotifyApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = SpotifyApi::new("access-token")?;
///     let album = api.get_album("4aawyAB9vmqN3uQ7FjRGTy").await?;
///     println!("{} by {}", album.name, album.artists_string(", "));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SpotifyApi<T = HttpTransport> {
    transport: T,
    access_token: Arc<RwLock<String>>,
}

impl SpotifyApi<HttpTransport> {
    /// Create a client against the public API with default settings.
    pub fn new<S: Into<String>>(access_token: S) -> Result<Self> {
        Self::with_config(&ApiConfig::default(), access_token)
    }

    /// Create a client with custom transport settings.
    pub fn with_config<S: Into<String>>(config: &ApiConfig, access_token: S) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?, access_token))
    }
}

impl<T: Transport> SpotifyApi<T> {
    /// Create a client on top of any transport.
    pub fn with_transport<S: Into<String>>(transport: T, access_token: S) -> Self {
        Self {
            transport,
            access_token: Arc::new(RwLock::new(access_token.into())),
        }
    }

    /// Replace the bearer token used by subsequent requests.
    pub async fn set_access_token<S: Into<String>>(&self, access_token: S) {
        *self.access_token.write().await = access_token.into();
        debug!("Access token updated");
    }

    /// Current bearer token.
    pub async fn access_token(&self) -> String {
        self.access_token.read().await.clone()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a GET request and return the JSON body.
    async fn get(&self, path: String, query: Query) -> Result<Value> {
        let request = ApiRequest {
            method: Method::GET,
            path,
            query: query.0,
            access_token: self.access_token().await,
        };
        debug!("GET {} with params: {:?}", request.path, request.query);

        Ok(self.transport.send(request).await?)
    }

    /// Get an album with its artists, cover art and first page of tracks.
    pub async fn get_album(&self, id: &str) -> Result<Album> {
        let response = self
            .get(format!("/v1/albums/{}", segment(id)?), Query::new())
            .await?;
        compose::album().hydrate_default(&response)
    }

    /// Get several albums at once.
    ///
    /// Unknown IDs are dropped from the result, so match albums to the
    /// requested IDs by `id` rather than by position.
    pub async fn get_albums<S: AsRef<str>>(&self, ids: &[S]) -> Result<AlbumCollection> {
        let ids = require_ids(ids)?;
        let response = self
            .get("/v1/albums".to_string(), Query::new().push("ids", ids))
            .await?;
        compose::collection_of::<Album>().hydrate_default(&response)
    }

    /// Get one page of an album's tracks.
    pub async fn get_album_tracks(&self, id: &str, page: Page) -> Result<TrackPagination> {
        let response = self
            .get(
                format!("/v1/albums/{}/tracks", segment(id)?),
                Query::new().page(page),
            )
            .await?;
        compose::pagination_of::<Track>().hydrate_default(&response)
    }

    /// Get an artist.
    pub async fn get_artist(&self, id: &str) -> Result<Artist> {
        let response = self
            .get(format!("/v1/artists/{}", segment(id)?), Query::new())
            .await?;
        compose::artist().hydrate_default(&response)
    }

    /// Get several artists at once. Unknown IDs are dropped from the result.
    pub async fn get_artists<S: AsRef<str>>(&self, ids: &[S]) -> Result<ArtistCollection> {
        let ids = require_ids(ids)?;
        let response = self
            .get("/v1/artists".to_string(), Query::new().push("ids", ids))
            .await?;
        compose::collection_of::<Artist>().hydrate_default(&response)
    }

    /// Get one page of an artist's albums.
    ///
    /// `album_types` filters by "album", "single", "appears_on" or
    /// "compilation"; an empty slice or country applies no filter.
    pub async fn get_artist_albums<S: AsRef<str>>(
        &self,
        id: &str,
        country: &str,
        album_types: &[S],
        page: Page,
    ) -> Result<AlbumPagination> {
        let query = Query::new()
            .push_list("album_type", album_types)
            .push_non_empty("country", country)
            .page(page);
        let response = self
            .get(format!("/v1/artists/{}/albums", segment(id)?), query)
            .await?;
        compose::pagination_of::<Album>().hydrate_default(&response)
    }

    /// Get an artist's most popular tracks in a market.
    pub async fn get_artist_top_tracks(&self, id: &str, country: &str) -> Result<TrackCollection> {
        let response = self
            .get(
                format!("/v1/artists/{}/top-tracks", segment(id)?),
                Query::new().push_non_empty("country", country),
            )
            .await?;
        compose::collection_of::<Track>().hydrate_default(&response)
    }

    /// Get artists similar to the given one.
    pub async fn get_artist_related_artists(&self, id: &str) -> Result<ArtistCollection> {
        let response = self
            .get(
                format!("/v1/artists/{}/related-artists", segment(id)?),
                Query::new(),
            )
            .await?;
        compose::collection_of::<Artist>().hydrate_default(&response)
    }

    /// Get a track with its album and artists.
    pub async fn get_track(&self, id: &str) -> Result<Track> {
        let response = self
            .get(format!("/v1/tracks/{}", segment(id)?), Query::new())
            .await?;
        compose::track().hydrate_default(&response)
    }

    /// Get several tracks at once. Unknown IDs are dropped from the result.
    pub async fn get_tracks<S: AsRef<str>>(&self, ids: &[S]) -> Result<TrackCollection> {
        let ids = require_ids(ids)?;
        let response = self
            .get("/v1/tracks".to_string(), Query::new().push("ids", ids))
            .await?;
        compose::collection_of::<Track>().hydrate_default(&response)
    }

    /// Get a user's public profile.
    pub async fn get_user_profile(&self, user_id: &str) -> Result<User> {
        let response = self
            .get(format!("/v1/users/{}", segment(user_id)?), Query::new())
            .await?;
        compose::user().hydrate_default(&response)
    }

    /// Get the profile of the user the token belongs to.
    pub async fn get_current_user(&self) -> Result<User> {
        let response = self.get("/v1/me".to_string(), Query::new()).await?;
        compose::user().hydrate_default(&response)
    }

    /// Get a playlist with its owner and first page of entries.
    ///
    /// `fields` restricts the response to the listed fields. The fields
    /// the hydrators require (`id`, `name`, page envelopes) must be kept.
    pub async fn get_playlist<S: AsRef<str>>(
        &self,
        user_id: &str,
        id: &str,
        fields: &[S],
    ) -> Result<Playlist> {
        let response = self
            .get(
                format!("/v1/users/{}/playlists/{}", segment(user_id)?, segment(id)?),
                Query::new().push_list("fields", fields),
            )
            .await?;
        compose::playlist().hydrate_default(&response)
    }

    /// Get one page of a playlist's entries.
    pub async fn get_playlist_tracks<S: AsRef<str>>(
        &self,
        user_id: &str,
        id: &str,
        fields: &[S],
        page: Page,
    ) -> Result<PlaylistTrackPagination> {
        let response = self
            .get(
                format!(
                    "/v1/users/{}/playlists/{}/tracks",
                    segment(user_id)?,
                    segment(id)?
                ),
                Query::new().push_list("fields", fields).page(page),
            )
            .await?;
        compose::pagination_of::<PlaylistTrack>().hydrate_default(&response)
    }

    /// Get one page of a user's playlists.
    pub async fn get_user_playlists(&self, user_id: &str, page: Page) -> Result<PlaylistPagination> {
        let response = self
            .get(
                format!("/v1/users/{}/playlists", segment(user_id)?),
                Query::new().page(page),
            )
            .await?;
        compose::pagination_of::<Playlist>().hydrate_default(&response)
    }
}
