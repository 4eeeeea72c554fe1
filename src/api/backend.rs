//! HTTP client for the metadata backend.
//!
//! Every backend endpoint is a plain GET with the shared credential in the
//! `pass` query parameter. Thumbnails come from the public oEmbed service.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use super::MetadataSource;
use crate::config::ClientConfig;
use crate::converters::{AlbumRecord, ArtistRecord, EmbedRecord, PlaylistRecord, TrackRecord};
use crate::error::{MetadataError, Result};
use crate::models::{playlist_uri, EntityKind, SearchResults};

/// Backend endpoints, without host or credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Search(String),
    Track(String),
    Artist(String),
    Album(String),
    Playlist { user: String, playlist_id: String },
    Download(String),
}

impl Endpoint {
    /// Path and query, ending where `pass` is appended.
    fn path(&self) -> String {
        match self {
            Endpoint::Search(query) => format!("/search/?query={}&", urlencoding::encode(query)),
            Endpoint::Track(id) => format!("/track/{}?", id),
            Endpoint::Artist(id) => format!("/artist/{}?", id),
            Endpoint::Album(id) => format!("/album/{}?", id),
            // The owner is kept decoded; re-encode it for the path.
            Endpoint::Playlist { user, playlist_id } => format!(
                "/playlist/{}?",
                playlist_uri(&urlencoding::encode(user), playlist_id)
            ),
            Endpoint::Download(id) => format!("/download/{}?", id),
        }
    }

    /// Full URL on the configured backend.
    pub fn url(&self, config: &ClientConfig) -> String {
        format!(
            "{}{}pass={}",
            config.base_url(),
            self.path(),
            urlencoding::encode(&config.pass)
        )
    }
}

/// oEmbed URL for an entity.
pub fn thumbnail_url(config: &ClientConfig, kind: EntityKind, id: &str) -> String {
    format!("{}?url={}", config.embed_url, kind.uri(id))
}

/// Metadata backend client.
///
/// # Example
///
/// ```rust,no_run
/// use spotmeta::{BackendApi, ClientConfig, MetadataSource};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = BackendApi::new(ClientConfig::new("localhost:8080", "secret"))?;
///     let record = api.track("4uLU6hMCjMI75M1A2tKUQC").await?;
///     println!("Track: {}", record.name);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BackendApi {
    client: Client,
    config: ClientConfig,
}

impl BackendApi {
    /// Create a new backend client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET a URL and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", redact(url));

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("{} answered {}", redact(url), status);
            return Err(MetadataError::ApiError(format!(
                "HTTP {} from {}",
                status,
                redact(url)
            )));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get_endpoint<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        self.get_json(&endpoint.url(&self.config)).await
    }
}

/// Hide the credential in logged URLs.
fn redact(url: &str) -> String {
    match url.find("pass=") {
        Some(idx) => format!("{}pass=***", &url[..idx]),
        None => url.to_string(),
    }
}

#[async_trait]
impl MetadataSource for BackendApi {
    async fn track(&self, id: &str) -> Result<TrackRecord> {
        self.get_endpoint(Endpoint::Track(id.to_string())).await
    }

    async fn artist(&self, id: &str) -> Result<ArtistRecord> {
        self.get_endpoint(Endpoint::Artist(id.to_string())).await
    }

    async fn album(&self, id: &str) -> Result<AlbumRecord> {
        self.get_endpoint(Endpoint::Album(id.to_string())).await
    }

    async fn playlist(&self, user: &str, playlist_id: &str) -> Result<PlaylistRecord> {
        self.get_endpoint(Endpoint::Playlist {
            user: user.to_string(),
            playlist_id: playlist_id.to_string(),
        })
        .await
    }

    async fn search(&self, query: &str) -> Result<SearchResults> {
        #[derive(serde::Deserialize)]
        struct SearchEnvelope {
            #[serde(default)]
            results: SearchResults,
        }

        let envelope: SearchEnvelope = self
            .get_endpoint(Endpoint::Search(query.to_string()))
            .await?;
        Ok(envelope.results)
    }

    async fn thumbnail(&self, kind: EntityKind, id: &str) -> Result<EmbedRecord> {
        self.get_json(&thumbnail_url(&self.config, kind, id)).await
    }

    fn stream_url(&self, track_id: &str) -> String {
        Endpoint::Download(track_id.to_string()).url(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{classify, Reference};

    fn config() -> ClientConfig {
        ClientConfig::new("localhost:8080", "s3cret")
    }

    #[test]
    fn test_endpoint_urls() {
        let config = config();
        assert_eq!(
            Endpoint::Track("abc".to_string()).url(&config),
            "http://localhost:8080/track/abc?pass=s3cret"
        );
        assert_eq!(
            Endpoint::Album("abc".to_string()).url(&config),
            "http://localhost:8080/album/abc?pass=s3cret"
        );
        assert_eq!(
            Endpoint::Playlist {
                user: "alice".to_string(),
                playlist_id: "xyz".to_string(),
            }
            .url(&config),
            "http://localhost:8080/playlist/spotify:user:alice:playlist:xyz?pass=s3cret"
        );
    }

    #[test]
    fn test_playlist_owner_is_reencoded() {
        let endpoint = match classify("spotify:user:a%23b:playlist:xyz") {
            Some(Reference::Playlist { user, playlist }) => Endpoint::Playlist {
                user,
                playlist_id: playlist,
            },
            other => panic!("unexpected reference: {:?}", other),
        };

        let url = reqwest::Url::parse(&endpoint.url(&config())).unwrap();
        assert_eq!(url.path(), "/playlist/spotify:user:a%23b:playlist:xyz");
        assert_eq!(url.query(), Some("pass=s3cret"));
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_search_query_is_encoded() {
        assert_eq!(
            Endpoint::Search("queens of the stone age & co".to_string()).url(&config()),
            "http://localhost:8080/search/?query=queens%20of%20the%20stone%20age%20%26%20co&pass=s3cret"
        );
    }

    #[test]
    fn test_stream_url_is_synthesized() {
        let api = BackendApi::new(config()).unwrap();
        assert_eq!(
            api.stream_url("4uLU6hMCjMI75M1A2tKUQC"),
            "http://localhost:8080/download/4uLU6hMCjMI75M1A2tKUQC?pass=s3cret"
        );
    }

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(
            thumbnail_url(&config(), EntityKind::Artist, "abc"),
            "https://embed.spotify.com/oembed?url=spotify:artist:abc"
        );
    }

    #[test]
    fn test_redact() {
        assert_eq!(
            redact("http://h/track/a?pass=s3cret"),
            "http://h/track/a?pass=***"
        );
        assert_eq!(redact("https://embed/oembed?url=x"), "https://embed/oembed?url=x");
    }
}
