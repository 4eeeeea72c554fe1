//! Wire record to model converters.
//!
//! Pure conversions only: everything here works on records already
//! fetched. Nested lookups are the resolver's job; these functions fill in
//! what a record carries by itself and produce stubs for the rest.

pub mod records;

use tracing::warn;

use crate::codec::gid_to_public_id;
use crate::error::Result;
use crate::models::{
    playlist_uri, Album, Artist, Disc, EntityKind, Playlist, PlaylistItem, ReleaseDate, Track,
};

pub use records::{
    AlbumRecord, ArtistRecord, DiscRecord, EmbedRecord, GidRecord, NamedRecord, PlaylistRecord,
    TrackRecord,
};

/// Join credited artist names for display.
///
/// First name as is, the second as `" ft. <name>"`, every further one as
/// `", <name>"`: `["A", "B", "C"]` gives `"A ft. B, C"`.
pub fn artist_display<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut display = String::new();
    for (idx, name) in names.into_iter().enumerate() {
        match idx {
            0 => {}
            1 => display.push_str(" ft. "),
            _ => display.push_str(", "),
        }
        display.push_str(name);
    }
    display
}

/// Public IDs of referenced entities, in wire order, one result per entry.
pub fn public_ids(records: &[GidRecord]) -> Vec<Result<String>> {
    records.iter().map(|r| gid_to_public_id(&r.gid)).collect()
}

/// Keep the decodable IDs, in order.
pub fn decodable_ids(records: &[GidRecord]) -> Vec<String> {
    public_ids(records)
        .into_iter()
        .filter_map(|id| match id {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("Skipping entry: {}", e);
                None
            }
        })
        .collect()
}

/// Credited artists as stubs carrying the name from the parent record.
pub fn stub_artists(records: &[ArtistRecord]) -> Vec<Artist> {
    records
        .iter()
        .filter_map(|r| match gid_to_public_id(&r.gid) {
            Ok(id) => Some(Artist::stub(id, r.name.as_str())),
            Err(e) => {
                warn!("Skipping artist {}: {}", r.name, e);
                None
            }
        })
        .collect()
}

/// Track fields carried by the record itself.
///
/// Artists, thumbnail and stream URL are left for the resolver.
pub fn parse_track(id: &str, record: &TrackRecord) -> Track {
    let album = gid_to_public_id(&record.album.gid).ok().map(|album_id| {
        Box::new(Album {
            title: record.album.name.clone(),
            ..Album::stub(album_id)
        })
    });

    Track {
        title: record.name.clone(),
        artist: artist_display(record.artist.iter().map(|a| a.name.as_str())),
        album,
        duration_ms: record.duration,
        track_number: record.number,
        disc_number: record.disc_number,
        id: id.to_string(),
        uri: EntityKind::Track.uri(id),
        ..Default::default()
    }
}

/// Album fields carried by the record itself, discs as track stubs.
pub fn parse_album(id: &str, record: &AlbumRecord) -> Album {
    Album {
        title: record.name.clone(),
        artist: artist_display(record.artist.iter().map(|a| a.name.as_str())),
        discs: parse_discs(&record.disc),
        release_date: ReleaseDate::from_parts(
            record.date.year,
            record.date.month,
            record.date.day,
        ),
        id: id.to_string(),
        uri: EntityKind::Album.uri(id),
        ..Default::default()
    }
}

/// Discs in wire order, numbered from zero, with track stubs.
pub fn parse_discs(records: &[DiscRecord]) -> Vec<Disc> {
    records
        .iter()
        .enumerate()
        .map(|(idx, disc)| Disc {
            number: idx as u32,
            declared_number: disc.number,
            tracks: decodable_ids(&disc.track)
                .into_iter()
                .map(Track::stub)
                .collect(),
        })
        .collect()
}

/// Artist fields carried by the record itself.
///
/// Top tracks come from the first group only; albums and singles are
/// flattened across groups. All of them are stubs.
pub fn parse_artist(id: &str, record: &ArtistRecord) -> Artist {
    let top_tracks = record
        .top_track
        .first()
        .map(|group| {
            decodable_ids(&group.track)
                .into_iter()
                .map(Track::stub)
                .collect()
        })
        .unwrap_or_default();

    Artist {
        name: record.name.clone(),
        top_tracks,
        albums: album_stubs(&record.album_group),
        singles: album_stubs(&record.single_group),
        id: id.to_string(),
        uri: EntityKind::Artist.uri(id),
        ..Default::default()
    }
}

fn album_stubs(groups: &[records::AlbumGroup]) -> Vec<Album> {
    groups
        .iter()
        .flat_map(|group| decodable_ids(&group.album))
        .map(Album::stub)
        .collect()
}

/// Flatten a playlist record and tag it with the IDs it was requested by.
pub fn parse_playlist(user: &str, playlist_id: &str, record: PlaylistRecord) -> Playlist {
    let items = record
        .contents
        .items
        .into_iter()
        .map(|item| PlaylistItem {
            track_uri: item.uri,
            added_by: item.attributes.added_by,
            timestamp: item.attributes.timestamp,
        })
        .collect();

    Playlist {
        owner_id: user.to_string(),
        playlist_id: playlist_id.to_string(),
        uri: playlist_uri(user, playlist_id),
        name: record.attributes.name,
        description: record.attributes.description,
        length: record.length,
        truncated: record.contents.truncated,
        items,
        thumbnail_url: None,
    }
}
