//! Search result models.
//!
//! Hits are returned as the backend sends them. A hit's kind is not a
//! field; it is recovered from its URI with the same classifier used for
//! inbound references.

use serde::{Deserialize, Serialize};

use crate::codec::{classify, Reference};

/// Album summary inside a track hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HitAlbum {
    pub name: String,
    pub uri: String,
    #[serde(rename = "image")]
    pub image_url: String,
}

/// Artist summary inside a track or album hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HitArtist {
    pub name: String,
    pub uri: String,
    #[serde(rename = "image")]
    pub image_url: String,
}

/// A single search hit of any kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchHit {
    pub name: String,
    pub uri: String,
    #[serde(rename = "image")]
    pub image_url: String,
    pub album: HitAlbum,
    pub artists: Vec<HitArtist>,
    /// Duration in milliseconds (track hits).
    pub duration: u64,
    #[serde(rename = "followersCount")]
    pub followers_count: u64,
    /// Owner name (playlist hits).
    pub author: String,
}

impl SearchHit {
    /// What the hit addresses, or `None` if its URI is not recognized.
    pub fn reference(&self) -> Option<Reference> {
        classify(&self.uri)
    }
}

/// One category of hits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchHits {
    pub hits: Vec<SearchHit>,
}

/// Hits grouped by category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchResults {
    pub tracks: SearchHits,
    pub albums: SearchHits,
    pub artists: SearchHits,
    pub playlists: SearchHits,
}

impl SearchResults {
    /// All hits: tracks, albums, artists, then playlists.
    pub fn hits(&self) -> impl Iterator<Item = &SearchHit> {
        self.tracks
            .hits
            .iter()
            .chain(&self.albums.hits)
            .chain(&self.artists.hits)
            .chain(&self.playlists.hits)
    }

    /// Hits paired with their classified reference; unrecognized URIs are skipped.
    pub fn references(&self) -> Vec<(Reference, &SearchHit)> {
        self.hits()
            .filter_map(|hit| hit.reference().map(|r| (r, hit)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.hits().next().is_none()
    }
}
