//! Pagination envelope and page item hydration.
//!
//! A page is hydrated in two steps: [`envelope`] copies `total`, `limit`,
//! `offset` and works out the next offset, then [`paginated_items`] builds
//! each entry of `items` and checks the count against the `limit` set by
//! the envelope. The envelope has to run first.

use reqwest::Url;
use serde_json::Value;

use super::source::{required_array, required_u32};
use super::{apply, Hydrate, Hydrator};
use crate::error::{Result, SpotifyError};
use crate::models::{Album, Pagination, Playlist, PlaylistTrack, Track};

/// Copy the `{total, limit, offset, next}` envelope of a page.
pub fn envelope<T>(source: &Value, page: &mut Pagination<T>) -> Result<()> {
    page.total = required_u32(source, "total")?;
    page.limit = required_u32(source, "limit")?;
    page.offset = required_u32(source, "offset")?;

    let item_count = count(required_array(source, "items")?.len())?;
    page.next_offset = next_offset(source, page.offset, item_count, page.total)?;
    Ok(())
}

fn count(len: usize) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| SpotifyError::mapping(format!("page holds too many items: {}", len)))
}

/// Work out where the next page starts.
///
/// An explicit `next: null` means this is the last page. A `next` URL gives
/// the offset directly. When the key is absent the offset is inferred from
/// the counts.
fn next_offset(source: &Value, offset: u32, item_count: u32, total: u32) -> Result<Option<u32>> {
    let end = offset.saturating_add(item_count);
    match source.get("next") {
        Some(Value::Null) => Ok(None),
        Some(Value::String(url)) => Ok(Some(offset_from_url(url).unwrap_or(end))),
        Some(_) => Err(SpotifyError::mapping("field `next` should be a URL or null")),
        None if item_count > 0 && end < total => Ok(Some(end)),
        None => Ok(None),
    }
}

fn offset_from_url(url: &str) -> Option<u32> {
    let url = Url::parse(url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "offset")
        .and_then(|(_, value)| value.parse().ok())
}

/// Build every entry of `items` with the item type's own hydrators.
pub fn paginated_items<T: Hydrate>(source: &Value, page: &mut Pagination<T>) -> Result<()> {
    let items = required_array(source, "items")?;
    if page.limit > 0 && items.len() > page.limit as usize {
        return Err(SpotifyError::mapping(format!(
            "page holds {} items but its limit is {}",
            items.len(),
            page.limit
        )));
    }

    page.items = items.iter().map(T::from_json).collect::<Result<Vec<_>>>()?;
    Ok(())
}

/// Hydrators for a standalone page response.
pub fn page_hydrators<T: Hydrate>() -> [Hydrator<Pagination<T>>; 2] {
    [envelope::<T>, paginated_items::<T>]
}

/// Entity that embeds a page of its tracks.
pub trait HasTracks {
    type Item: Hydrate;

    fn tracks_mut(&mut self) -> &mut Pagination<Self::Item>;
}

impl HasTracks for Album {
    type Item = Track;

    fn tracks_mut(&mut self) -> &mut Pagination<Track> {
        &mut self.tracks
    }
}

impl HasTracks for Playlist {
    type Item = PlaylistTrack;

    fn tracks_mut(&mut self) -> &mut Pagination<PlaylistTrack> {
        &mut self.tracks
    }
}

/// Hydrate the page embedded under `tracks`, if the payload carries one.
///
/// A `tracks` object without `items` (as in playlist listings, which only
/// give `{href, total}`) leaves the page empty apart from its total.
pub fn nested_tracks<T: HasTracks>(source: &Value, target: &mut T) -> Result<()> {
    let Some(tracks) = super::source::optional_object(source, "tracks")? else {
        return Ok(());
    };

    if tracks.get("items").is_none() {
        target.tracks_mut().total = required_u32(tracks, "total")?;
        return Ok(());
    }

    let page = apply(&page_hydrators::<T::Item>(), tracks, Pagination::default())?;
    *target.tracks_mut() = page;
    Ok(())
}
