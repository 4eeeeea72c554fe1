//! In-memory [`MetadataSource`] for tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};

use super::MetadataSource;
use crate::codec::base62::ALPHABET;
use crate::converters::{AlbumRecord, ArtistRecord, EmbedRecord, PlaylistRecord, TrackRecord};
use crate::error::{MetadataError, Result};
use crate::models::{EntityKind, SearchResults};

/// Wire Gid for a public ID.
pub fn gid(public_id: &str) -> String {
    let number = public_id.bytes().fold(0u128, |acc, c| {
        let digit = ALPHABET.iter().position(|&a| a == c).unwrap() as u128;
        acc * 62 + digit
    });
    STANDARD.encode(number.to_be_bytes())
}

/// Serves records registered per ID and fails on request.
#[derive(Default)]
pub struct MockSource {
    records: HashMap<(EntityKind, String), Value>,
    thumbnails: HashMap<(EntityKind, String), String>,
    search: Option<Value>,
    failing: HashSet<String>,
    log: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw wire record and a thumbnail for it.
    pub fn with_record(mut self, kind: EntityKind, id: &str, record: Value) -> Self {
        self.thumbnails.insert(
            (kind, id.to_string()),
            format!("https://i.scdn.co/image/{}", id),
        );
        self.records.insert((kind, id.to_string()), record);
        self
    }

    pub fn with_track(self, id: &str, name: &str, artist_ids: &[(&str, &str)]) -> Self {
        let artists: Vec<Value> = artist_ids
            .iter()
            .map(|(artist_id, artist_name)| json!({ "gid": gid(artist_id), "name": artist_name }))
            .collect();
        self.with_record(
            EntityKind::Track,
            id,
            json!({
                "gid": gid(id),
                "name": name,
                "number": 1,
                "disc_number": 1,
                "duration": 200000,
                "artist": artists,
            }),
        )
    }

    pub fn with_artist(self, id: &str, name: &str, top_track_ids: &[&str]) -> Self {
        let tracks: Vec<Value> = top_track_ids.iter().map(|t| json!({ "gid": gid(t) })).collect();
        self.with_record(
            EntityKind::Artist,
            id,
            json!({
                "gid": gid(id),
                "name": name,
                "top_track": [ { "track": tracks } ],
            }),
        )
    }

    /// Override the thumbnail URL served for an entity.
    pub fn with_thumbnail(mut self, kind: EntityKind, id: &str, url: &str) -> Self {
        self.thumbnails
            .insert((kind, id.to_string()), url.to_string());
        self
    }

    pub fn with_search(mut self, response: Value) -> Self {
        self.search = Some(response);
        self
    }

    /// Every lookup of this ID fails with a transport-style error.
    pub fn failing(mut self, id: &str) -> Self {
        self.failing.insert(id.to_string());
        self
    }

    /// Record lookups made so far, as `kind:id`.
    pub fn fetches(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn lookup<T: serde::de::DeserializeOwned + Default>(
        &self,
        kind: EntityKind,
        id: &str,
    ) -> Result<T> {
        self.log.lock().unwrap().push(format!("{}:{}", kind, id));
        if self.failing.contains(id) {
            return Err(MetadataError::ApiError(format!("connection reset ({})", id)));
        }
        match self.records.get(&(kind, id.to_string())) {
            Some(record) => Ok(serde_json::from_value(record.clone())?),
            None => Ok(T::default()),
        }
    }
}

#[async_trait]
impl MetadataSource for MockSource {
    async fn track(&self, id: &str) -> Result<TrackRecord> {
        self.lookup(EntityKind::Track, id)
    }

    async fn artist(&self, id: &str) -> Result<ArtistRecord> {
        self.lookup(EntityKind::Artist, id)
    }

    async fn album(&self, id: &str) -> Result<AlbumRecord> {
        self.lookup(EntityKind::Album, id)
    }

    async fn playlist(&self, user: &str, playlist_id: &str) -> Result<PlaylistRecord> {
        if self.failing.contains(user) {
            return Err(MetadataError::ApiError(format!("connection reset ({})", user)));
        }
        self.lookup(EntityKind::Playlist, playlist_id)
    }

    async fn search(&self, query: &str) -> Result<SearchResults> {
        if self.failing.contains(query) {
            return Err(MetadataError::ApiError("connection reset".to_string()));
        }
        let response = self.search.clone().unwrap_or_else(|| json!({}));
        Ok(serde_json::from_value(response)?)
    }

    async fn thumbnail(&self, kind: EntityKind, id: &str) -> Result<EmbedRecord> {
        if self.failing.contains(id) {
            return Err(MetadataError::ApiError(format!("connection reset ({})", id)));
        }
        Ok(EmbedRecord {
            thumbnail_url: self
                .thumbnails
                .get(&(kind, id.to_string()))
                .cloned()
                .unwrap_or_default(),
        })
    }

    fn stream_url(&self, track_id: &str) -> String {
        format!("http://mock/download/{}?pass=test", track_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::gid_to_public_id;

    #[test]
    fn test_gid_helper_matches_codec() {
        for id in ["4uLU6hMCjMI75M1A2tKUQC", "0OdUWJ0sBjDrqHygGUXeCF"] {
            assert_eq!(gid_to_public_id(&gid(id)).unwrap(), id);
        }
    }

    #[tokio::test]
    async fn test_unknown_id_is_nameless() {
        let source = MockSource::new();
        let record = source.artist("nobody").await.unwrap();
        assert!(record.name.is_empty());
        assert_eq!(source.fetches(), ["artist:nobody"]);
    }

    #[tokio::test]
    async fn test_failing_id() {
        let source = MockSource::new().with_artist("a", "A", &[]).failing("a");
        tokio_test::assert_err!(source.artist("a").await);
        tokio_test::assert_err!(source.thumbnail(EntityKind::Artist, "a").await);
    }
}
