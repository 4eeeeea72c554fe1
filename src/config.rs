//! Client configuration.

/// Default thumbnail (oEmbed) endpoint.
pub const DEFAULT_EMBED_URL: &str = "https://embed.spotify.com/oembed";

/// Default User-Agent for outgoing requests.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// How far nested references are followed.
///
/// Each nested lookup runs one level shallower than its parent
/// (`Full` → `OneLevel` → `StubOnly`), so resolution always terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionDepth {
    /// No secondary lookups; nested entities are identifiers only.
    StubOnly,
    /// Credited artists are resolved; tracks and albums stay stubs.
    #[default]
    OneLevel,
    /// Artists, top tracks, disc tracks and discographies are resolved.
    Full,
}

impl ResolutionDepth {
    /// Whether credited artists are looked up.
    pub fn resolves_artists(&self) -> bool {
        !matches!(self, ResolutionDepth::StubOnly)
    }

    /// Whether nested tracks and albums are looked up.
    pub fn resolves_releases(&self) -> bool {
        matches!(self, ResolutionDepth::Full)
    }

    /// Depth used for lookups made on behalf of this level.
    pub fn nested(&self) -> ResolutionDepth {
        match self {
            ResolutionDepth::Full => ResolutionDepth::OneLevel,
            ResolutionDepth::OneLevel | ResolutionDepth::StubOnly => ResolutionDepth::StubOnly,
        }
    }
}

/// Connection settings for the metadata backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend host (`host:port`) or base URL.
    pub host: String,
    /// Shared access credential, sent as `pass`.
    pub pass: String,
    /// Thumbnail (oEmbed) endpoint.
    pub embed_url: String,
    pub user_agent: String,
    pub depth: ResolutionDepth,
}

impl ClientConfig {
    pub fn new<S1: Into<String>, S2: Into<String>>(host: S1, pass: S2) -> Self {
        Self {
            host: host.into(),
            pass: pass.into(),
            embed_url: DEFAULT_EMBED_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            depth: ResolutionDepth::default(),
        }
    }

    pub fn with_embed_url<S: Into<String>>(mut self, embed_url: S) -> Self {
        self.embed_url = embed_url.into();
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_depth(mut self, depth: ResolutionDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Backend base URL without a trailing slash.
    ///
    /// A bare host is served over plain HTTP.
    pub fn base_url(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert_eq!(
            ClientConfig::new("localhost:8080", "p").base_url(),
            "http://localhost:8080"
        );
        assert_eq!(
            ClientConfig::new("https://meta.example.com/", "p").base_url(),
            "https://meta.example.com"
        );
    }

    #[test]
    fn test_depth_always_bottoms_out() {
        let mut depth = ResolutionDepth::Full;
        assert!(depth.resolves_releases());
        depth = depth.nested();
        assert_eq!(depth, ResolutionDepth::OneLevel);
        assert!(depth.resolves_artists());
        assert!(!depth.resolves_releases());
        depth = depth.nested();
        assert_eq!(depth, ResolutionDepth::StubOnly);
        assert!(!depth.resolves_artists());
        assert_eq!(depth.nested(), ResolutionDepth::StubOnly);
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("h", "p");
        assert_eq!(config.depth, ResolutionDepth::OneLevel);
        assert_eq!(config.embed_url, DEFAULT_EMBED_URL);
    }
}
