//! Movie metadata client for enriching recommendations.
//!
//! This crate provides:
//! - The `MetadataResolver` capability: title in, cast / director / release
//!   info out, or a typed `NotFound`
//! - `TmdbClient`, a resolver over The Movie Database v3 REST API with
//!   per-request timeouts and retry on transient failures
//! - `MovieMetadata::placeholder()`, the "N/A" record callers substitute
//!   when a lookup fails
//!
//! Recommendation ranking never calls this crate; only the presentation
//! layer does, through an injected `Arc<dyn MetadataResolver>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub mod tmdb;

pub use tmdb::{TmdbClient, TmdbConfig};

/// Marker used for any metadata field that could not be resolved
pub const NOT_AVAILABLE: &str = "N/A";

/// Link used when a movie has no page of its own
pub const TMDB_HOME: &str = "https://www.themoviedb.org/";

/// Errors that can occur when talking to the metadata service
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Metadata service returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Invalid response from metadata service: {0}")]
    InvalidResponse(String),

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Whether retrying the same request might succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ClientError::Timeout(_) => true,
            ClientError::Http(e) => e.is_timeout() || e.is_connect(),
            ClientError::Status { status, .. } => *status == 429 || *status >= 500,
            ClientError::InvalidResponse(_) | ClientError::InvalidConfig(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Display metadata for one movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieMetadata {
    /// Top five billed cast members, comma-joined
    pub cast: String,
    pub director: String,
    pub release_date: String,
    /// e.g. "175 minutes"
    pub runtime: String,
    /// Uppercase ISO 639-1 code, e.g. "EN"
    pub language: String,
    pub link: String,
}

impl MovieMetadata {
    /// Every field "N/A", linking to the database home page
    pub fn placeholder() -> Self {
        Self {
            cast: NOT_AVAILABLE.to_string(),
            director: NOT_AVAILABLE.to_string(),
            release_date: NOT_AVAILABLE.to_string(),
            runtime: NOT_AVAILABLE.to_string(),
            language: NOT_AVAILABLE.to_string(),
            link: TMDB_HOME.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}

/// Outcome of a metadata lookup that reached the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(MovieMetadata),
    NotFound,
}

impl Resolution {
    /// The resolved metadata, or the placeholder on `NotFound`
    pub fn into_metadata(self) -> MovieMetadata {
        match self {
            Resolution::Found(metadata) => metadata,
            Resolution::NotFound => MovieMetadata::placeholder(),
        }
    }
}

/// Resolves a movie title to display metadata.
///
/// Implementations own their timeout and retry policy. Callers treat any
/// `Err` the same as `NotFound` and show the placeholder.
#[async_trait]
pub trait MetadataResolver: Send + Sync {
    async fn resolve(&self, title: &str) -> Result<Resolution>;

    /// Name used in logs
    fn name(&self) -> &'static str;
}

/// Resolver that never finds anything.
///
/// Used when enrichment is disabled, e.g. no access token is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

#[async_trait]
impl MetadataResolver for NoopResolver {
    async fn resolve(&self, _title: &str) -> Result<Resolution> {
        Ok(Resolution::NotFound)
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
