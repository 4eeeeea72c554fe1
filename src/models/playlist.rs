//! Playlist-related models.

use serde::{Deserialize, Serialize};

/// One entry of a playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistItem {
    /// Track URI as stored in the playlist.
    pub track_uri: String,

    /// User who added the entry.
    pub added_by: String,

    /// Time the entry was added, as sent by the backend.
    pub timestamp: i64,
}

/// A user-curated playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    /// Owner (user) ID, percent-decoded.
    pub owner_id: String,

    /// Playlist ID.
    pub playlist_id: String,

    /// Canonical URI.
    pub uri: String,

    /// Playlist name.
    pub name: String,

    /// Playlist description.
    #[serde(default)]
    pub description: String,

    /// Item count declared by the backend.
    pub length: u32,

    /// Whether the backend returned only part of the items.
    #[serde(default)]
    pub truncated: bool,

    /// Entries in playlist order.
    #[serde(default)]
    pub items: Vec<PlaylistItem>,

    /// Playlist thumbnail. The backend does not provide one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Playlist {
    /// Number of entries actually returned.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether some declared entries are missing from `items`.
    pub fn is_incomplete(&self) -> bool {
        self.truncated || self.items.len() < self.length as usize
    }
}
