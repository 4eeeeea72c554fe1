//! Common types shared across all models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Service name used in URIs (`spotify:track:<id>`).
pub const SERVICE: &str = "spotify";

/// The kind of entity a reference or record addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Track,
    Artist,
    Album,
    Playlist,
}

impl EntityKind {
    /// Path segment used by both the backend and the public web links.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Track => "track",
            EntityKind::Artist => "artist",
            EntityKind::Album => "album",
            EntityKind::Playlist => "playlist",
        }
    }

    /// Canonical URI for an entity of this kind.
    ///
    /// Playlists need an owner as well, see [`playlist_uri`].
    pub fn uri(&self, id: &str) -> String {
        format!("{}:{}:{}", SERVICE, self.as_str(), id)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical URI for a user playlist.
pub fn playlist_uri(user: &str, playlist_id: &str) -> String {
    format!("{}:user:{}:playlist:{}", SERVICE, user, playlist_id)
}

/// Release date structure.
///
/// Year is always present when known; the backend sends zero for unknown
/// month and day.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseDate {
    /// Year of release.
    pub year: i32,

    /// Month of release (1-12), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,

    /// Day of release (1-31), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl ReleaseDate {
    /// Build a date from the backend's numeric fields, treating zero as unknown.
    pub fn from_parts(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: (month != 0).then_some(month),
            day: (day != 0).then_some(day),
        }
    }

    /// Whether the backend supplied any date at all.
    pub fn is_known(&self) -> bool {
        self.year != 0
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.month, self.day) {
            (Some(m), Some(d)) => write!(f, "{:04}-{:02}-{:02}", self.year, m, d),
            (Some(m), None) => write!(f, "{:04}-{:02}", self.year, m),
            _ => write!(f, "{:04}", self.year),
        }
    }
}
