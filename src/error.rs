//! Error types for metadata resolution.

use thiserror::Error;

use crate::models::EntityKind;

/// Main error type for all lookups against the metadata backend.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Input matched none of the accepted link or URI shapes.
    #[error("Reference not recognized: {0}")]
    UnrecognizedReference(String),

    /// A Gid inside a wire record was not valid base64.
    #[error("Invalid gid {gid}: {reason}")]
    InvalidGid { gid: String, reason: String },

    /// The backend answered, but the record has no name.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// The thumbnail service returned no image for the entity.
    #[error("No thumbnail for {kind} {id}")]
    MissingThumbnail { kind: EntityKind, id: String },

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON did not match the expected wire record.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Generic backend error with message.
    #[error("API error: {0}")]
    ApiError(String),
}

impl MetadataError {
    /// Whether repeating the same call could plausibly succeed.
    ///
    /// Malformed input never becomes valid on a second attempt.
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            MetadataError::UnrecognizedReference(_) | MetadataError::InvalidGid { .. }
        )
    }
}

/// Result type alias for backend operations.
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Failure of a root resolution.
///
/// A reference that cannot be parsed yields no object at all. Any later
/// failure hands back whatever was filled in before it happened.
#[derive(Debug, Error)]
pub enum ResolveError<T> {
    /// Input matched none of the accepted link or URI shapes.
    #[error("Reference not recognized: {0}")]
    Unrecognized(String),

    /// The root fetch failed; `partial` holds the fields known so far.
    #[error("{source}")]
    Incomplete {
        partial: Box<T>,
        #[source]
        source: MetadataError,
    },
}

impl<T> ResolveError<T> {
    pub(crate) fn incomplete(partial: T, source: MetadataError) -> Self {
        ResolveError::Incomplete {
            partial: Box::new(partial),
            source,
        }
    }

    /// The partially populated object, if one exists.
    pub fn partial(&self) -> Option<&T> {
        match self {
            ResolveError::Unrecognized(_) => None,
            ResolveError::Incomplete { partial, .. } => Some(partial),
        }
    }

    /// Take the partially populated object, if one exists.
    pub fn into_partial(self) -> Option<T> {
        match self {
            ResolveError::Unrecognized(_) => None,
            ResolveError::Incomplete { partial, .. } => Some(*partial),
        }
    }

    /// Drop the partial object and keep the underlying cause.
    pub fn into_error(self) -> MetadataError {
        match self {
            ResolveError::Unrecognized(input) => MetadataError::UnrecognizedReference(input),
            ResolveError::Incomplete { source, .. } => source,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ResolveError::Unrecognized(_) => false,
            ResolveError::Incomplete { source, .. } => source.is_retryable(),
        }
    }

    /// Convert the partial object, keeping the cause.
    pub fn map<U, F>(self, f: F) -> ResolveError<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ResolveError::Unrecognized(input) => ResolveError::Unrecognized(input),
            ResolveError::Incomplete { partial, source } => ResolveError::Incomplete {
                partial: Box::new(f(*partial)),
                source,
            },
        }
    }
}

/// Result of a root resolution.
pub type ResolveResult<T> = std::result::Result<T, ResolveError<T>>;
