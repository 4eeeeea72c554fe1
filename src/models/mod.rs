//! Data models for resolved metadata.
//!
//! This module contains the domain objects handed back to callers:
//! tracks, artists, albums with their discs, playlists, and search hits.

pub mod album;
pub mod artist;
pub mod common;
pub mod playlist;
pub mod search;
pub mod track;

use serde::{Deserialize, Serialize};

// Re-exports for convenience
pub use album::{Album, Disc};
pub use artist::Artist;
pub use common::{playlist_uri, EntityKind, ReleaseDate, SERVICE};
pub use playlist::{Playlist, PlaylistItem};
pub use search::{HitAlbum, HitArtist, SearchHit, SearchHits, SearchResults};
pub use track::Track;

/// Any resolved root object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entity {
    Track(Track),
    Artist(Artist),
    Album(Album),
    Playlist(Playlist),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Track(_) => EntityKind::Track,
            Entity::Artist(_) => EntityKind::Artist,
            Entity::Album(_) => EntityKind::Album,
            Entity::Playlist(_) => EntityKind::Playlist,
        }
    }
}
