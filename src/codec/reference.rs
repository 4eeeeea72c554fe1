//! Parsing of links and URIs into references.
//!
//! Accepted shapes:
//! - `https://open.spotify.com/<kind>/<id>` and `spotify:<kind>:<id>` for
//!   tracks, artists and albums
//! - `https://open.spotify.com/user/<user>/playlist/<id>` and
//!   `spotify:user:<user>:playlist:<id>` for playlists
//!
//! Anything after the alphanumeric ID (query string, fragment, extra path)
//! is ignored. The user part may be percent-encoded.

use std::fmt;
use std::str::FromStr;

use crate::error::{MetadataError, Result};
use crate::models::{playlist_uri, EntityKind, SERVICE};

/// Prefix of public web links.
const OPEN_URL_PREFIX: &str = "https://open.spotify.com/";

/// What a link or URI addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    Track(String),
    Artist(String),
    Album(String),
    Playlist { user: String, playlist: String },
}

impl Reference {
    pub fn kind(&self) -> EntityKind {
        match self {
            Reference::Track(_) => EntityKind::Track,
            Reference::Artist(_) => EntityKind::Artist,
            Reference::Album(_) => EntityKind::Album,
            Reference::Playlist { .. } => EntityKind::Playlist,
        }
    }

    /// The entity's own ID (the playlist ID for playlists).
    pub fn id(&self) -> &str {
        match self {
            Reference::Track(id) | Reference::Artist(id) | Reference::Album(id) => id,
            Reference::Playlist { playlist, .. } => playlist,
        }
    }

    /// Canonical URI form.
    pub fn uri(&self) -> String {
        match self {
            Reference::Playlist { user, playlist } => playlist_uri(user, playlist),
            other => other.kind().uri(other.id()),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}

impl FromStr for Reference {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self> {
        parse_reference(s)
    }
}

/// Classify a link or URI.
///
/// Returns `None` when the input matches no accepted shape. Used both for
/// caller input and for URIs found in search hits.
pub fn classify(input: &str) -> Option<Reference> {
    let input = input.trim();
    let (rest, sep) = if let Some(rest) = input.strip_prefix(OPEN_URL_PREFIX) {
        (rest, '/')
    } else if let Some(rest) = input
        .strip_prefix(SERVICE)
        .and_then(|r| r.strip_prefix(':'))
    {
        (rest, ':')
    } else {
        return None;
    };

    let (kind, rest) = rest.split_once(sep)?;
    match kind {
        "track" => leading_id(rest).map(Reference::Track),
        "artist" => leading_id(rest).map(Reference::Artist),
        "album" => leading_id(rest).map(Reference::Album),
        "user" => user_playlist(rest, sep),
        _ => None,
    }
}

/// Like [`classify`], but unrecognized input is an error.
pub fn parse_reference(input: &str) -> Result<Reference> {
    classify(input).ok_or_else(|| MetadataError::UnrecognizedReference(input.to_string()))
}

/// The alphanumeric run at the start of `s`, if non-empty.
fn leading_id(s: &str) -> Option<String> {
    let end = s
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(s.len());
    (end > 0).then(|| s[..end].to_string())
}

fn user_playlist(rest: &str, sep: char) -> Option<Reference> {
    let marker = if sep == '/' { "/playlist/" } else { ":playlist:" };
    let (user, rest) = rest.split_once(marker)?;
    if user.is_empty() || user.contains(char::is_whitespace) {
        return None;
    }
    let user = urlencoding::decode(user).ok()?.into_owned();
    let playlist = leading_id(rest)?;
    Some(Reference::Playlist { user, playlist })
}
