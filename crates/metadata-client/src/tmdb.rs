//! TMDB v3 REST client.
//!
//! Lookup flow for one title:
//! 1. `GET search/movie?query=…&language=en-US&page=1`, first result wins
//! 2. `GET movie/{id}` and `GET movie/{id}/credits`, concurrently
//!
//! Every request carries the bearer token and is bounded by the configured
//! timeout. Timeouts, connection errors, 429 and 5xx responses are retried
//! with exponential backoff up to `max_retries` extra attempts.

use crate::{ClientError, MetadataResolver, MovieMetadata, Resolution, Result, NOT_AVAILABLE};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const TOP_CAST: usize = 5;

/// Upper bound on a single retry delay
pub const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Connection settings for the TMDB API
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_url: String,
    pub access_token: String,
    pub timeout: Duration,
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further retry
    pub initial_backoff: Duration,
}

impl TmdbConfig {
    pub const DEFAULT_API_URL: &'static str = "https://api.themoviedb.org/3";

    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            access_token: access_token.into(),
            timeout: Duration::from_secs(5),
            max_retries: 2,
            initial_backoff: Duration::from_millis(200),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Delay before retry number `attempt + 1`, capped at `MAX_BACKOFF`
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(MAX_BACKOFF)
    }

    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    id: u64,
}

#[derive(Debug, Default, Deserialize)]
struct MovieDetails {
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    runtime: Option<u32>,
    #[serde(default)]
    original_language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Credits {
    #[serde(default)]
    cast: Vec<CastMember>,
    #[serde(default)]
    crew: Vec<CrewMember>,
}

#[derive(Debug, Deserialize)]
struct CastMember {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CrewMember {
    name: String,
    #[serde(default)]
    job: String,
}

/// Metadata resolver backed by the TMDB API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    config: TmdbConfig,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Result<Self> {
        if config.access_token.trim().is_empty() {
            return Err(ClientError::InvalidConfig(
                "TMDB access token is empty".to_string(),
            ));
        }
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    /// Id of the first search hit for `title`, if any
    async fn search(&self, title: &str) -> Result<Option<u64>> {
        let response: SearchResponse = self
            .get_json(
                "search/movie",
                &[("query", title), ("language", "en-US"), ("page", "1")],
            )
            .await?;
        Ok(response.results.first().map(|hit| hit.id))
    }

    async fn details(&self, movie_id: u64) -> Result<MovieDetails> {
        self.get_json(&format!("movie/{}", movie_id), &[]).await
    }

    async fn credits(&self, movie_id: u64) -> Result<Credits> {
        self.get_json(&format!("movie/{}/credits", movie_id), &[])
            .await
    }

    /// GET with retry on transient failures
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), path);
        let mut attempt = 0;
        loop {
            match self.try_get_json(&url, query).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < self.config.max_retries => {
                    let delay = self.config.backoff_for(attempt);
                    attempt += 1;
                    warn!(
                        "TMDB request to {} failed ({}); retry {}/{} in {:?}",
                        url, e, attempt, self.config.max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.config.access_token)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| match self.classify(e) {
                ClientError::Http(e) => ClientError::InvalidResponse(e.to_string()),
                other => other,
            })
    }

    fn classify(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout(self.config.timeout)
        } else {
            ClientError::Http(error)
        }
    }
}

#[async_trait]
impl MetadataResolver for TmdbClient {
    #[instrument(skip(self))]
    async fn resolve(&self, title: &str) -> Result<Resolution> {
        let Some(movie_id) = self.search(title).await? else {
            debug!("No TMDB match for '{}'", title);
            return Ok(Resolution::NotFound);
        };

        let (details, credits) = tokio::try_join!(self.details(movie_id), self.credits(movie_id))?;
        Ok(Resolution::Found(build_metadata(movie_id, details, credits)))
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

fn build_metadata(movie_id: u64, details: MovieDetails, credits: Credits) -> MovieMetadata {
    let cast: Vec<&str> = credits
        .cast
        .iter()
        .take(TOP_CAST)
        .map(|member| member.name.as_str())
        .collect();
    let director = credits
        .crew
        .iter()
        .find(|member| member.job == "Director")
        .map(|member| member.name.clone());

    MovieMetadata {
        cast: if cast.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            cast.join(", ")
        },
        director: or_not_available(director),
        release_date: or_not_available(details.release_date),
        runtime: details
            .runtime
            .map(|minutes| format!("{} minutes", minutes))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        language: or_not_available(details.original_language.map(|l| l.to_uppercase())),
        link: format!("https://www.themoviedb.org/movie/{}", movie_id),
    }
}

fn or_not_available(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
