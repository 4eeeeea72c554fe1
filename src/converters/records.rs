//! Wire records returned by the metadata backend.
//!
//! Field names follow the backend's JSON contract. Every field defaults, so
//! a record with missing fields still decodes; an absent `name` is how the
//! backend reports an unknown entity.

use serde::Deserialize;

/// A bare reference to another entity.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GidRecord {
    /// Base64-encoded Gid.
    pub gid: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TopTrackGroup {
    pub track: Vec<GidRecord>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlbumGroup {
    pub album: Vec<GidRecord>,
}

/// Artist record, also embedded (name and gid only) in tracks and albums.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArtistRecord {
    pub gid: String,
    pub name: String,
    pub top_track: Vec<TopTrackGroup>,
    pub album_group: Vec<AlbumGroup>,
    pub single_group: Vec<AlbumGroup>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DateRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiscRecord {
    pub number: u32,
    pub track: Vec<GidRecord>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlbumRecord {
    pub gid: String,
    pub name: String,
    pub artist: Vec<ArtistRecord>,
    pub disc: Vec<DiscRecord>,
    pub date: DateRecord,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackRecord {
    pub gid: String,
    pub name: String,
    pub number: u32,
    pub disc_number: u32,
    /// Milliseconds.
    pub duration: u64,
    pub album: AlbumRecord,
    pub artist: Vec<ArtistRecord>,
}

/// oEmbed response from the thumbnail service.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmbedRecord {
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaylistAttributes {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaylistItemAttributes {
    pub added_by: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaylistItemRecord {
    pub uri: String,
    pub attributes: PlaylistItemAttributes,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaylistContents {
    pub pos: u32,
    pub truncated: bool,
    pub items: Vec<PlaylistItemRecord>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaylistRecord {
    pub gid: String,
    pub length: u32,
    pub attributes: PlaylistAttributes,
    pub contents: PlaylistContents,
}

/// Records whose empty name means "not found".
pub trait NamedRecord {
    fn name(&self) -> &str;
}

impl NamedRecord for TrackRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedRecord for ArtistRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedRecord for AlbumRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedRecord for PlaylistRecord {
    fn name(&self) -> &str {
        &self.attributes.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_track_record_decodes_nested_shape() {
        let record: TrackRecord = serde_json::from_value(json!({
            "gid": "k7xBSmBnR7K2Ekke+D1aPg==",
            "name": "Never Gonna Give You Up",
            "number": 1,
            "disc_number": 1,
            "duration": 213573,
            "album": {
                "gid": "lGsRMCWHQJyp2ejKzkC5Yg==",
                "name": "Whenever You Need Somebody",
                "date": { "year": 1987, "month": 11, "day": 12 }
            },
            "artist": [ { "gid": "Gp3Ol63ASOSHymghref+/Q==", "name": "Rick Astley" } ],
            "popularity": 80
        }))
        .unwrap();

        assert_eq!(record.duration, 213573);
        assert_eq!(record.album.date.year, 1987);
        assert_eq!(record.artist.len(), 1);
        assert!(record.artist[0].top_track.is_empty());
    }

    #[test]
    fn test_empty_object_decodes_as_nameless() {
        let record: ArtistRecord = serde_json::from_str("{}").unwrap();
        assert!(record.name.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let result: Result<AlbumRecord, _> = serde_json::from_value(json!({ "disc": "oops" }));
        assert!(result.is_err());
    }
}
