use anyhow::Result;
use metadata_client::{MetadataResolver, NoopResolver, TmdbClient, TmdbConfig};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Enrichment settings loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API read access token; enrichment is disabled without one
    #[serde(default)]
    pub tmdb_access_token: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_tmdb_timeout_secs")]
    pub tmdb_timeout_secs: u64,

    /// Extra attempts on transient failures
    #[serde(default = "default_tmdb_max_retries")]
    pub tmdb_max_retries: u32,
}

fn default_tmdb_api_url() -> String {
    TmdbConfig::DEFAULT_API_URL.to_string()
}

fn default_tmdb_timeout_secs() -> u64 {
    5
}

fn default_tmdb_max_retries() -> u32 {
    2
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn enrichment_enabled(&self) -> bool {
        self.tmdb_access_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }

    /// TMDB resolver when a token is configured, otherwise a resolver that
    /// finds nothing
    pub fn resolver(&self) -> Result<Arc<dyn MetadataResolver>> {
        match self.tmdb_access_token.as_deref() {
            Some(token) if self.enrichment_enabled() => {
                let tmdb = TmdbClient::new(
                    TmdbConfig::new(token)
                        .with_api_url(&self.tmdb_api_url)
                        .with_timeout(Duration::from_secs(self.tmdb_timeout_secs))
                        .with_max_retries(self.tmdb_max_retries),
                )?;
                Ok(Arc::new(tmdb))
            }
            _ => {
                info!("TMDB_ACCESS_TOKEN not set; enrichment disabled");
                Ok(Arc::new(NoopResolver))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        envy::from_iter::<_, Config>(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]);
        assert_eq!(config.tmdb_access_token, None);
        assert_eq!(config.tmdb_api_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb_timeout_secs, 5);
        assert_eq!(config.tmdb_max_retries, 2);
        assert!(!config.enrichment_enabled());
        assert_eq!(config.resolver().unwrap().name(), "noop");
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("TMDB_ACCESS_TOKEN", "secret"),
            ("TMDB_API_URL", "http://localhost:9000/3"),
            ("TMDB_TIMEOUT_SECS", "1"),
            ("TMDB_MAX_RETRIES", "0"),
        ]);
        assert!(config.enrichment_enabled());
        assert_eq!(config.tmdb_timeout_secs, 1);
        assert_eq!(config.tmdb_max_retries, 0);
        assert_eq!(config.resolver().unwrap().name(), "tmdb");
    }

    #[test]
    fn test_blank_token_disables_enrichment() {
        let config = from_pairs(&[("TMDB_ACCESS_TOKEN", "  ")]);
        assert!(!config.enrichment_enabled());
        assert_eq!(config.resolver().unwrap().name(), "noop");
    }
}
