//! Artist model.

use serde::{Deserialize, Serialize};

use super::album::Album;
use super::common::EntityKind;
use super::track::Track;

/// An artist with their top tracks and discography.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Artist name.
    pub name: String,

    /// Top tracks from the first top-track group. Stubs unless resolved
    /// with [`ResolutionDepth::Full`](crate::ResolutionDepth::Full).
    /// Entries with an empty or undecodable Gid are left out.
    #[serde(default)]
    pub top_tracks: Vec<Track>,

    /// Albums from every album group.
    #[serde(default)]
    pub albums: Vec<Album>,

    /// Singles from every single group.
    #[serde(default)]
    pub singles: Vec<Album>,

    /// Portrait thumbnail.
    pub thumbnail_url: String,

    /// Public (base62) ID.
    pub id: String,

    /// Canonical URI.
    pub uri: String,
}

impl Artist {
    /// An artist known only by ID and the name carried in a parent record.
    pub fn stub<S1: Into<String>, S2: Into<String>>(id: S1, name: S2) -> Self {
        let id = id.into();
        Self {
            name: name.into(),
            uri: EntityKind::Artist.uri(&id),
            id,
            ..Default::default()
        }
    }

    /// Whether the artist's own record was never fetched.
    pub fn is_stub(&self) -> bool {
        self.thumbnail_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_stub() {
        let artist = Artist::stub("0OdUWJ0sBjDrqHygGUXeCF", "Band of Horses");
        assert_eq!(artist.name, "Band of Horses");
        assert_eq!(artist.uri, "spotify:artist:0OdUWJ0sBjDrqHygGUXeCF");
        assert!(artist.is_stub());
    }
}
