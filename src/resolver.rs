//! Metadata resolution.
//!
//! Turns a link or URI into a fully assembled object by chaining lookups
//! against a [`MetadataSource`]:
//!
//! - the root record and its thumbnail are required; if either fails the
//!   caller gets the error together with a partial object
//! - nested references (credited artists, and at [`ResolutionDepth::Full`]
//!   top tracks, disc tracks and discographies) are looked up concurrently;
//!   a failed lookup drops that entry and keeps the rest in wire order

use futures_util::future::{join, join_all, BoxFuture, FutureExt};
use std::future::Future;
use tracing::{debug, error, warn};

use crate::api::{BackendApi, MetadataSource};
use crate::codec::{gid_to_public_id, parse_reference, Reference};
use crate::config::{ClientConfig, ResolutionDepth};
use crate::converters::{self, ArtistRecord, NamedRecord};
use crate::error::{MetadataError, ResolveError, ResolveResult, Result};
use crate::models::{
    playlist_uri, Album, Artist, Disc, Entity, EntityKind, Playlist, SearchResults, Track,
};

/// Outcome of one nested lookup.
pub type SubResolution<T> = std::result::Result<T, MetadataError>;

/// Keep successful nested lookups in order, logging the omitted ones.
pub fn collect_resolved<T, I>(outcomes: I) -> Vec<T>
where
    I: IntoIterator<Item = SubResolution<T>>,
{
    outcomes
        .into_iter()
        .filter_map(|outcome| match outcome {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Omitting nested entry: {}", e);
                None
            }
        })
        .collect()
}

/// Resolves references into nested metadata.
///
/// # Example
///
/// ```rust,no_run
/// use spotmeta::{ClientConfig, Resolver};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let resolver = Resolver::new(ClientConfig::new("localhost:8080", "secret"))?;
///
///     let track = resolver
///         .resolve_track("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC")
///         .await?;
///     println!("{} by {} ({})", track.title, track.artist, track.duration_formatted());
///
///     let album = resolver.resolve_album("spotify:album:4w3NeXtywU398NYW4903rY").await?;
///     println!("{} tracks on {} discs", album.total_tracks(), album.discs.len());
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Resolver<S = BackendApi> {
    source: S,
    depth: ResolutionDepth,
}

impl Resolver<BackendApi> {
    /// Create a resolver backed by the HTTP backend.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let depth = config.depth;
        Ok(Self {
            source: BackendApi::new(config)?,
            depth,
        })
    }
}

impl<S: MetadataSource> Resolver<S> {
    /// Create a resolver over any record source.
    pub fn with_source(source: S, depth: ResolutionDepth) -> Self {
        Self { source, depth }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn depth(&self) -> ResolutionDepth {
        self.depth
    }

    /// Set how far nested references are followed.
    pub fn set_depth(&mut self, depth: ResolutionDepth) {
        self.depth = depth;
    }

    // ==================
    // ROOT RESOLUTION
    // ==================

    /// Resolve a track link or URI.
    pub async fn resolve_track(&self, input: &str) -> ResolveResult<Track> {
        match parse_reference(input) {
            Ok(Reference::Track(id)) => logged(input, self.track_by_id(&id, self.depth).await),
            _ => Err(ResolveError::Unrecognized(input.to_string())),
        }
    }

    /// Resolve an artist link or URI.
    pub async fn resolve_artist(&self, input: &str) -> ResolveResult<Artist> {
        match parse_reference(input) {
            Ok(Reference::Artist(id)) => logged(input, self.artist_by_id(&id, self.depth).await),
            _ => Err(ResolveError::Unrecognized(input.to_string())),
        }
    }

    /// Resolve an album link or URI.
    pub async fn resolve_album(&self, input: &str) -> ResolveResult<Album> {
        match parse_reference(input) {
            Ok(Reference::Album(id)) => logged(input, self.album_by_id(&id, self.depth).await),
            _ => Err(ResolveError::Unrecognized(input.to_string())),
        }
    }

    /// Resolve a user playlist link or URI.
    ///
    /// A single lookup: no thumbnail and no nested resolution.
    pub async fn resolve_playlist(&self, input: &str) -> ResolveResult<Playlist> {
        match parse_reference(input) {
            Ok(Reference::Playlist { user, playlist }) => {
                logged(input, self.playlist_by_id(&user, &playlist).await)
            }
            _ => Err(ResolveError::Unrecognized(input.to_string())),
        }
    }

    /// Resolve any supported link or URI.
    pub async fn resolve(&self, input: &str) -> ResolveResult<Entity> {
        match parse_reference(input) {
            Ok(reference) => logged(input, self.resolve_reference(&reference).await),
            Err(_) => Err(ResolveError::Unrecognized(input.to_string())),
        }
    }

    /// Resolve an already classified reference, e.g. from a search hit.
    pub async fn resolve_reference(&self, reference: &Reference) -> ResolveResult<Entity> {
        match reference {
            Reference::Track(id) => self
                .track_by_id(id, self.depth)
                .await
                .map(Entity::Track)
                .map_err(|e| e.map(Entity::Track)),
            Reference::Artist(id) => self
                .artist_by_id(id, self.depth)
                .await
                .map(Entity::Artist)
                .map_err(|e| e.map(Entity::Artist)),
            Reference::Album(id) => self
                .album_by_id(id, self.depth)
                .await
                .map(Entity::Album)
                .map_err(|e| e.map(Entity::Album)),
            Reference::Playlist { user, playlist } => self
                .playlist_by_id(user, playlist)
                .await
                .map(Entity::Playlist)
                .map_err(|e| e.map(Entity::Playlist)),
        }
    }

    /// Free-text search. Hits are not resolved.
    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        let results = self.source.search(query).await.inspect_err(|e| {
            error!("Search for '{}' failed: {}", query, e);
        })?;
        debug!(
            "Search for '{}' returned {} hits",
            query,
            results.hits().count()
        );
        Ok(results)
    }

    // ==================
    // LOOKUPS BY ID
    // ==================

    fn track_by_id<'a>(
        &'a self,
        id: &'a str,
        depth: ResolutionDepth,
    ) -> BoxFuture<'a, ResolveResult<Track>> {
        async move {
            let (record, thumbnail) = self
                .fetch_with_thumbnail(EntityKind::Track, id, self.source.track(id))
                .await
                .map_err(|e| {
                    let partial = Track {
                        id: id.to_string(),
                        ..Default::default()
                    };
                    ResolveError::incomplete(partial, e)
                })?;

            let mut track = converters::parse_track(id, &record);
            track.thumbnail_url = thumbnail;
            track.stream_url = self.source.stream_url(id);
            track.artists = self.credited_artists(&record.artist, depth).await;
            Ok(track)
        }
        .boxed()
    }

    fn artist_by_id<'a>(
        &'a self,
        id: &'a str,
        depth: ResolutionDepth,
    ) -> BoxFuture<'a, ResolveResult<Artist>> {
        async move {
            let (record, thumbnail) = self
                .fetch_with_thumbnail(EntityKind::Artist, id, self.source.artist(id))
                .await
                .map_err(|e| {
                    let partial = Artist {
                        id: id.to_string(),
                        ..Default::default()
                    };
                    ResolveError::incomplete(partial, e)
                })?;

            let mut artist = converters::parse_artist(id, &record);
            artist.thumbnail_url = thumbnail;

            if depth.resolves_releases() {
                let nested = depth.nested();
                let top_tracks = std::mem::take(&mut artist.top_tracks);
                let albums = std::mem::take(&mut artist.albums);
                let singles = std::mem::take(&mut artist.singles);
                let (top_tracks, (albums, singles)) = join(
                    self.expand_tracks(top_tracks, nested),
                    join(
                        self.expand_albums(albums, nested),
                        self.expand_albums(singles, nested),
                    ),
                )
                .await;
                artist.top_tracks = top_tracks;
                artist.albums = albums;
                artist.singles = singles;
            }

            Ok(artist)
        }
        .boxed()
    }

    fn album_by_id<'a>(
        &'a self,
        id: &'a str,
        depth: ResolutionDepth,
    ) -> BoxFuture<'a, ResolveResult<Album>> {
        async move {
            let (record, thumbnail) = self
                .fetch_with_thumbnail(EntityKind::Album, id, self.source.album(id))
                .await
                .map_err(|e| {
                    let partial = Album {
                        id: id.to_string(),
                        ..Default::default()
                    };
                    ResolveError::incomplete(partial, e)
                })?;

            let mut album = converters::parse_album(id, &record);
            album.thumbnail_url = thumbnail;

            let discs = std::mem::take(&mut album.discs);
            let (artists, discs) = join(
                self.credited_artists(&record.artist, depth),
                self.expand_discs(discs, depth),
            )
            .await;
            album.artists = artists;
            album.discs = discs;

            Ok(album)
        }
        .boxed()
    }

    async fn playlist_by_id(&self, user: &str, playlist_id: &str) -> ResolveResult<Playlist> {
        let partial = || Playlist {
            owner_id: user.to_string(),
            playlist_id: playlist_id.to_string(),
            uri: playlist_uri(user, playlist_id),
            ..Default::default()
        };

        match self.source.playlist(user, playlist_id).await {
            Ok(record) if record.name().is_empty() => Err(ResolveError::incomplete(
                partial(),
                MetadataError::NotFound {
                    kind: EntityKind::Playlist,
                    id: playlist_uri(user, playlist_id),
                },
            )),
            Ok(record) => Ok(converters::parse_playlist(user, playlist_id, record)),
            Err(e) => Err(ResolveError::incomplete(partial(), e)),
        }
    }

    /// Fetch a root record together with its thumbnail.
    ///
    /// A nameless record is "not found"; a missing thumbnail fails too.
    async fn fetch_with_thumbnail<R, F>(
        &self,
        kind: EntityKind,
        id: &str,
        fetch: F,
    ) -> Result<(R, String)>
    where
        R: NamedRecord,
        F: Future<Output = Result<R>>,
    {
        let (record, embed) = join(fetch, self.source.thumbnail(kind, id)).await;

        let record = record?;
        if record.name().is_empty() {
            return Err(MetadataError::NotFound {
                kind,
                id: id.to_string(),
            });
        }

        let thumbnail_url = embed?.thumbnail_url;
        if thumbnail_url.is_empty() {
            return Err(MetadataError::MissingThumbnail {
                kind,
                id: id.to_string(),
            });
        }

        Ok((record, thumbnail_url))
    }

    // ==================
    // NESTED RESOLUTION
    // ==================

    /// Credited artists: resolved one level down, or stubs at `StubOnly`.
    async fn credited_artists(
        &self,
        records: &[ArtistRecord],
        depth: ResolutionDepth,
    ) -> Vec<Artist> {
        if !depth.resolves_artists() {
            return converters::stub_artists(records);
        }

        let nested = depth.nested();
        let outcomes = join_all(records.iter().map(|r| self.nested_artist(&r.gid, nested))).await;
        collect_resolved(outcomes)
    }

    async fn nested_artist(&self, gid: &str, depth: ResolutionDepth) -> SubResolution<Artist> {
        let id = gid_to_public_id(gid)?;
        self.artist_by_id(&id, depth)
            .await
            .map_err(ResolveError::into_error)
    }

    /// Disc track stubs, resolved one level down at `Full`.
    async fn expand_discs(&self, discs: Vec<Disc>, depth: ResolutionDepth) -> Vec<Disc> {
        if !depth.resolves_releases() {
            return discs;
        }

        let nested = depth.nested();
        join_all(discs.into_iter().map(|mut disc| async move {
            let stubs = std::mem::take(&mut disc.tracks);
            disc.tracks = self.expand_tracks(stubs, nested).await;
            disc
        }))
        .await
    }

    async fn expand_tracks(&self, stubs: Vec<Track>, depth: ResolutionDepth) -> Vec<Track> {
        let outcomes = join_all(stubs.iter().map(|stub| self.track_by_id(&stub.id, depth))).await;
        collect_resolved(outcomes.into_iter().map(|o| o.map_err(ResolveError::into_error)))
    }

    async fn expand_albums(&self, stubs: Vec<Album>, depth: ResolutionDepth) -> Vec<Album> {
        let outcomes = join_all(stubs.iter().map(|stub| self.album_by_id(&stub.id, depth))).await;
        collect_resolved(outcomes.into_iter().map(|o| o.map_err(ResolveError::into_error)))
    }
}

/// Log a failed root resolution and pass the result through.
fn logged<T>(input: &str, result: ResolveResult<T>) -> ResolveResult<T> {
    if let Err(e) = &result {
        error!("Resolving {} failed: {}", input, e);
    }
    result
}
