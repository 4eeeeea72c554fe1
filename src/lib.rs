//! # spotmeta
//!
//! Resolve Spotify links and URIs into nested track, artist, album and
//! playlist metadata, fetched from a Spotify-compatible metadata backend.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`Resolver`] struct:
//!
//! ```rust,no_run
//! use spotmeta::{ClientConfig, ResolutionDepth, Resolver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("localhost:8080", "secret")
//!         .with_depth(ResolutionDepth::OneLevel);
//!     let resolver = Resolver::new(config)?;
//!
//!     // Any supported link or URI
//!     let entity = resolver.resolve("spotify:artist:0OdUWJ0sBjDrqHygGUXeCF").await?;
//!     println!("Resolved a {}", entity.kind());
//!
//!     // A failed root lookup still hands back what was known
//!     match resolver.resolve_track("spotify:track:4uLU6hMCjMI75M1A2tKUQC").await {
//!         Ok(track) => println!("{} by {}", track.title, track.artist),
//!         Err(e) => println!("Failed ({}), partial: {:?}", e, e.partial()),
//!     }
//!
//!     // Search hits classify back into references
//!     let results = resolver.search("no one knows").await?;
//!     for (reference, hit) in results.references() {
//!         println!("{} -> {}", hit.name, reference);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Low-Level APIs
//!
//! - [`codec`] - Gid decoding and reference classification
//! - [`BackendApi`] - Raw wire records from the backend
//! - [`converters`] - Wire record to model conversion

pub mod api;
pub mod codec;
pub mod config;
pub mod converters;
pub mod error;
pub mod models;
mod resolver;

// Main interface (recommended)
pub use resolver::{collect_resolved, Resolver, SubResolution};

// Low-level APIs
pub use api::{BackendApi, Endpoint, MetadataSource};
pub use codec::{classify, gid_to_public_id, parse_reference, Reference};
pub use config::{ClientConfig, ResolutionDepth};
pub use error::{MetadataError, ResolveError, ResolveResult};
pub use models::{
    Album, Artist, Disc, Entity, EntityKind, Playlist, PlaylistItem, SearchHit, SearchResults,
    Track,
};
