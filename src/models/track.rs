//! Track model.

use serde::{Deserialize, Serialize};

use super::album::Album;
use super::artist::Artist;
use super::common::EntityKind;

/// A track.
///
/// A stub carries only `id` and `uri`; a resolved track has every field
/// the backend and thumbnail service provided.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Track title.
    pub title: String,

    /// Display string of all credited artists ("A ft. B, C").
    pub artist: String,

    /// Credited artists, in wire order. Artists whose lookup failed are
    /// left out.
    #[serde(default)]
    pub artists: Vec<Artist>,

    /// Album stub the track belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<Box<Album>>,

    /// Duration in milliseconds.
    pub duration_ms: u64,

    /// Position on its disc, as declared by the backend.
    #[serde(default)]
    pub track_number: u32,

    /// Disc number, as declared by the backend.
    #[serde(default)]
    pub disc_number: u32,

    /// Cover thumbnail.
    pub thumbnail_url: String,

    /// Download URL on the configured backend. Never fetched here.
    pub stream_url: String,

    /// Public (base62) ID.
    pub id: String,

    /// Canonical URI.
    pub uri: String,
}

impl Track {
    /// A track known only by its public ID.
    pub fn stub<S: Into<String>>(id: S) -> Self {
        let id = id.into();
        Self {
            uri: EntityKind::Track.uri(&id),
            id,
            ..Default::default()
        }
    }

    /// Whether the track was never looked up on its own.
    ///
    /// Same rule as [`Artist::is_stub`] and [`Album::is_stub`]: a resolved
    /// root always carries its thumbnail.
    pub fn is_stub(&self) -> bool {
        self.thumbnail_url.is_empty()
    }

    /// Get the primary artist name.
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }

    /// Get duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        let total_seconds = self.duration_ms / 1000;
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}
