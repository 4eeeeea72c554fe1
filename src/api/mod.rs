//! Remote data clients.
//!
//! The resolver depends only on [`MetadataSource`]: "fetch the record for
//! this ID from this endpoint". [`BackendApi`] is the HTTP implementation.

pub mod backend;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::converters::{AlbumRecord, ArtistRecord, EmbedRecord, PlaylistRecord, TrackRecord};
use crate::error::Result;
use crate::models::{EntityKind, SearchResults};

pub use backend::{BackendApi, Endpoint};

/// Source of wire records.
///
/// Implement this trait to serve records from somewhere other than the
/// HTTP backend (tests, fixtures, a proxy).
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn track(&self, id: &str) -> Result<TrackRecord>;

    async fn artist(&self, id: &str) -> Result<ArtistRecord>;

    async fn album(&self, id: &str) -> Result<AlbumRecord>;

    async fn playlist(&self, user: &str, playlist_id: &str) -> Result<PlaylistRecord>;

    async fn search(&self, query: &str) -> Result<SearchResults>;

    /// oEmbed record for an entity's cover or portrait.
    async fn thumbnail(&self, kind: EntityKind, id: &str) -> Result<EmbedRecord>;

    /// Download URL for a track. Built, never fetched.
    fn stream_url(&self, track_id: &str) -> String;
}
