//! Album-related models.
//!
//! This module contains models for representing albums and their discs.

use serde::{Deserialize, Serialize};

use super::artist::Artist;
use super::common::{EntityKind, ReleaseDate};
use super::track::Track;

/// One disc of an album.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Disc {
    /// Zero-based position of the disc in the album record.
    pub number: u32,

    /// Disc number as declared by the backend.
    #[serde(default)]
    pub declared_number: u32,

    /// Tracks on the disc, in wire order. Entries with an empty or
    /// undecodable Gid are left out, so this can be shorter than the
    /// backend's track list.
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// A full album record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Album title.
    pub title: String,

    /// Display string of all credited artists ("A ft. B, C").
    pub artist: String,

    /// Credited artists, in wire order. Artists whose lookup failed are
    /// left out.
    #[serde(default)]
    pub artists: Vec<Artist>,

    /// Discs in wire order.
    #[serde(default)]
    pub discs: Vec<Disc>,

    /// Release date.
    #[serde(default)]
    pub release_date: ReleaseDate,

    /// Cover thumbnail.
    pub thumbnail_url: String,

    /// Public (base62) ID.
    pub id: String,

    /// Canonical URI.
    pub uri: String,
}

impl Album {
    /// An album known only by its public ID.
    pub fn stub<S: Into<String>>(id: S) -> Self {
        let id = id.into();
        Self {
            uri: EntityKind::Album.uri(&id),
            id,
            ..Default::default()
        }
    }

    /// Whether only the identifiers are populated.
    pub fn is_stub(&self) -> bool {
        self.thumbnail_url.is_empty()
    }

    /// Total number of tracks across all discs.
    pub fn total_tracks(&self) -> usize {
        self.discs.iter().map(|d| d.tracks.len()).sum()
    }

    /// All tracks in disc order.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.discs.iter().flat_map(|d| d.tracks.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_tracks() {
        let album = Album {
            discs: vec![
                Disc {
                    number: 0,
                    declared_number: 1,
                    tracks: vec![Track::stub("a"), Track::stub("b")],
                },
                Disc {
                    number: 1,
                    declared_number: 2,
                    tracks: vec![Track::stub("c")],
                },
            ],
            ..Default::default()
        };
        assert_eq!(album.total_tracks(), 3);
        let ids: Vec<_> = album.tracks().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_album_stub() {
        let album = Album::stub("xyz");
        assert!(album.is_stub());
        assert_eq!(album.uri, "spotify:album:xyz");
    }
}
