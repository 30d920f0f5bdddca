//! Track model.

use serde::{Deserialize, Serialize};

use super::album::Album;
use super::artist::{join_names, Artist};
use super::common::{Collection, Pagination};

/// Track as returned by the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Spotify track ID.
    pub id: String,

    /// Track name.
    pub name: String,

    /// Duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Position on its disc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_number: Option<u32>,

    /// Disc number, 1 unless the album has several discs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc_number: Option<u32>,

    /// Whether the track has explicit lyrics.
    #[serde(default)]
    pub explicit: bool,

    /// Album the track appears on. Absent for tracks listed under an album,
    /// and never carries its own track page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<Album>,

    /// Performing artists.
    #[serde(default)]
    pub artists: Vec<Artist>,
}

impl Track {
    /// Get all artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        join_names(&self.artists, separator)
    }

    /// Format duration as "M:SS".
    pub fn duration_formatted(&self) -> String {
        let total_secs = self.duration_ms.unwrap_or(0) / 1000;
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    }
}

/// Batch of tracks from a multi-id lookup or top-tracks query.
pub type TrackCollection = Collection<Track>;

/// Page of tracks, e.g. an album's track listing.
pub type TrackPagination = Pagination<Track>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_formatted() {
        let track = Track {
            duration_ms: Some(215_000),
            ..Default::default()
        };
        assert_eq!(track.duration_formatted(), "3:35");
    }

    #[test]
    fn test_duration_formatted_unknown() {
        assert_eq!(Track::default().duration_formatted(), "0:00");
    }

    #[test]
    fn test_artists_string() {
        let track = Track {
            artists: vec![Artist::new("a1", "First"), Artist::new("a2", "Second")],
            ..Default::default()
        };
        assert_eq!(track.artists_string(", "), "First, Second");
    }
}
