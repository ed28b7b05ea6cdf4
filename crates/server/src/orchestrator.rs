//! # Recommendation Orchestrator
//!
//! This module coordinates a full recommendation request:
//! 1. Rank similar movies from the shared `CatalogIndex`
//! 2. Resolve display metadata for every recommendation concurrently
//! 3. Substitute the placeholder for any lookup that fails, times out or
//!    finds nothing
//! 4. Return the enriched list in rank order
//!
//! A known title always yields its recommendations, even when every
//! enrichment call fails.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use metadata_client::{MetadataResolver, MovieMetadata};

use crate::index::{CatalogIndex, IndexConfig};
use crate::ranker::{RecommendOutcome, Recommendation};

/// Upper bound on a single enrichment lookup, retries included
pub const DEFAULT_ENRICH_TIMEOUT: Duration = Duration::from_secs(15);

/// A recommendation with its display metadata
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecommendation {
    pub recommendation: Recommendation,
    pub metadata: MovieMetadata,
}

/// Result of an enriched recommendation query
#[derive(Debug, Clone, PartialEq)]
pub enum EnrichedOutcome {
    Found(Vec<EnrichedRecommendation>),
    NotFound { title: String },
}

/// Main orchestrator that pairs ranking with metadata enrichment
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    index: Arc<CatalogIndex>,
    resolver: Arc<dyn MetadataResolver>,
    enrich_timeout: Duration,
}

impl RecommendationOrchestrator {
    pub fn new(index: Arc<CatalogIndex>, resolver: Arc<dyn MetadataResolver>) -> Self {
        Self {
            index,
            resolver,
            enrich_timeout: DEFAULT_ENRICH_TIMEOUT,
        }
    }

    /// Load the dataset and build the index off the async runtime
    pub async fn load(
        path: &Path,
        config: IndexConfig,
        resolver: Arc<dyn MetadataResolver>,
    ) -> Result<Self> {
        let path = path.to_path_buf();
        let index = tokio::task::spawn_blocking(move || CatalogIndex::load(&path, config))
            .await
            .context("Index build task panicked")??;
        Ok(Self::new(Arc::new(index), resolver))
    }

    /// Configure the per-lookup enrichment bound (default: 15s)
    pub fn with_enrich_timeout(mut self, timeout: Duration) -> Self {
        self.enrich_timeout = timeout;
        self
    }

    pub fn index(&self) -> &Arc<CatalogIndex> {
        &self.index
    }

    /// Main entry point: ranked, enriched recommendations for `title`
    #[instrument(skip(self))]
    pub async fn recommend(&self, title: &str, limit: usize) -> Result<EnrichedOutcome> {
        let start_time = Instant::now();

        let outcome = self
            .index
            .recommend_with_limit(title, limit)
            .context("Failed to rank recommendations")?;

        let recommendations = match outcome {
            RecommendOutcome::Found(recommendations) => recommendations,
            RecommendOutcome::NotFound { title } => {
                info!("'{}' is not in the catalog", title);
                return Ok(EnrichedOutcome::NotFound { title });
            }
        };
        info!("Ranked {} recommendations for '{}'", recommendations.len(), title);

        let enriched = self.enrich(recommendations).await;

        info!(
            "Total time to recommend for '{}': {:.2?}",
            title,
            start_time.elapsed()
        );
        Ok(EnrichedOutcome::Found(enriched))
    }

    /// Resolve metadata for every recommendation concurrently, keeping rank
    /// order
    async fn enrich(&self, recommendations: Vec<Recommendation>) -> Vec<EnrichedRecommendation> {
        let tasks: Vec<_> = recommendations
            .iter()
            .map(|rec| {
                let resolver = self.resolver.clone();
                let title = rec.title.clone();
                let timeout = self.enrich_timeout;
                tokio::spawn(async move {
                    tokio::time::timeout(timeout, resolver.resolve(&title)).await
                })
            })
            .collect();

        let mut enriched = Vec::with_capacity(recommendations.len());
        for (recommendation, task) in recommendations.into_iter().zip(tasks) {
            let metadata = match task.await {
                Ok(Ok(Ok(resolution))) => resolution.into_metadata(),
                Ok(Ok(Err(e))) => {
                    warn!(
                        "{} lookup failed for '{}': {}",
                        self.resolver.name(),
                        recommendation.title,
                        e
                    );
                    MovieMetadata::placeholder()
                }
                Ok(Err(_)) => {
                    warn!(
                        "{} lookup for '{}' timed out after {:?}",
                        self.resolver.name(),
                        recommendation.title,
                        self.enrich_timeout
                    );
                    MovieMetadata::placeholder()
                }
                Err(e) => {
                    warn!("Enrichment task for '{}' failed: {}", recommendation.title, e);
                    MovieMetadata::placeholder()
                }
            };
            enriched.push(EnrichedRecommendation {
                recommendation,
                metadata,
            });
        }
        enriched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use data_loader::MovieRecord;
    use metadata_client::{ClientError, NoopResolver, Resolution};
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn movie(id: u64, title: &str, content: &str) -> MovieRecord {
        MovieRecord {
            overview: content.to_string(),
            genres: "crime".to_string(),
            cast: "ensemble".to_string(),
            keywords: "keyword".to_string(),
            director: "director".to_string(),
            content: content.to_string(),
            ..MovieRecord::new(id, title)
        }
    }

    fn build_test_index() -> Arc<CatalogIndex> {
        let records = vec![
            movie(238, "The Godfather", "mafia family crime saga corleone"),
            movie(240, "The Godfather Part II", "mafia family crime saga corleone sequel"),
            movie(769, "Goodfellas", "mafia crime gangster"),
            movie(524, "Casino", "mafia crime las vegas"),
            movie(949, "Heat", "heist crime los angeles"),
            movie(348, "Alien", "space crew creature"),
        ];
        Arc::new(CatalogIndex::build(records, IndexConfig::default()).expect("index"))
    }

    // ============================================================================
    // Mock Resolvers
    // ============================================================================

    /// Finds every title; the link encodes the title for order checks
    #[derive(Default)]
    struct EchoResolver {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MetadataResolver for EchoResolver {
        async fn resolve(&self, title: &str) -> metadata_client::Result<Resolution> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Resolution::Found(MovieMetadata {
                cast: "Someone".to_string(),
                director: "Somebody".to_string(),
                release_date: "1990-01-01".to_string(),
                runtime: "120 minutes".to_string(),
                language: "EN".to_string(),
                link: format!("https://example.test/{}", title),
            }))
        }

        fn name(&self) -> &'static str {
            "echo"
        }
    }

    /// Fails for one title, finds the rest
    struct FlakyResolver {
        failing_title: &'static str,
    }

    #[async_trait]
    impl MetadataResolver for FlakyResolver {
        async fn resolve(&self, title: &str) -> metadata_client::Result<Resolution> {
            if title == self.failing_title {
                Err(ClientError::InvalidResponse("boom".to_string()))
            } else {
                EchoResolver::default().resolve(title).await
            }
        }

        fn name(&self) -> &'static str {
            "flaky"
        }
    }

    /// Never answers
    struct HangingResolver;

    #[async_trait]
    impl MetadataResolver for HangingResolver {
        async fn resolve(&self, _title: &str) -> metadata_client::Result<Resolution> {
            std::future::pending().await
        }

        fn name(&self) -> &'static str {
            "hanging"
        }
    }

    // ============================================================================
    // Tests
    // ============================================================================

    #[tokio::test]
    async fn test_enriches_every_recommendation_in_rank_order() {
        let index = build_test_index();
        let resolver = Arc::new(EchoResolver::default());
        let orchestrator = RecommendationOrchestrator::new(index.clone(), resolver.clone());

        let EnrichedOutcome::Found(enriched) =
            orchestrator.recommend("the godfather", 3).await.unwrap()
        else {
            panic!("expected recommendations");
        };

        let ranked = index.recommend_with_limit("the godfather", 3).unwrap();
        let titles: Vec<&str> = enriched
            .iter()
            .map(|e| e.recommendation.title.as_str())
            .collect();
        assert_eq!(titles, ranked.titles());
        assert_eq!(titles[0], "The Godfather Part II");

        for e in &enriched {
            assert_eq!(
                e.metadata.link,
                format!("https://example.test/{}", e.recommendation.title)
            );
        }
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_not_found_echoes_title_and_skips_enrichment() {
        let resolver = Arc::new(EchoResolver::default());
        let orchestrator = RecommendationOrchestrator::new(build_test_index(), resolver.clone());

        let outcome = orchestrator.recommend("Nonexistent Movie XYZ", 10).await.unwrap();
        assert_eq!(
            outcome,
            EnrichedOutcome::NotFound {
                title: "Nonexistent Movie XYZ".to_string()
            }
        );
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_lookup_gets_placeholder() {
        let orchestrator = RecommendationOrchestrator::new(
            build_test_index(),
            Arc::new(FlakyResolver {
                failing_title: "Goodfellas",
            }),
        );

        let EnrichedOutcome::Found(enriched) = orchestrator.recommend("Casino", 10).await.unwrap()
        else {
            panic!("expected recommendations");
        };

        assert_eq!(enriched.len(), 5);
        for e in &enriched {
            if e.recommendation.title == "Goodfellas" {
                assert!(e.metadata.is_placeholder());
            } else {
                assert!(!e.metadata.is_placeholder());
            }
        }
    }

    #[tokio::test]
    async fn test_timeouts_degrade_to_placeholders() {
        let orchestrator =
            RecommendationOrchestrator::new(build_test_index(), Arc::new(HangingResolver))
                .with_enrich_timeout(Duration::from_millis(20));

        let EnrichedOutcome::Found(enriched) = orchestrator.recommend("Heat", 10).await.unwrap()
        else {
            panic!("expected recommendations");
        };

        assert_eq!(enriched.len(), 5);
        assert!(enriched.iter().all(|e| e.metadata.is_placeholder()));
    }

    #[tokio::test]
    async fn test_noop_resolver_still_returns_recommendations() {
        let orchestrator =
            RecommendationOrchestrator::new(build_test_index(), Arc::new(NoopResolver));

        let EnrichedOutcome::Found(enriched) = orchestrator.recommend("alien", 10).await.unwrap()
        else {
            panic!("expected recommendations");
        };

        assert_eq!(enriched.len(), 5);
        assert!(enriched.iter().all(|e| e.metadata.is_placeholder()));
        assert!(enriched.iter().all(|e| e.recommendation.title != "Alien"));
    }

    #[tokio::test]
    async fn test_load_missing_dataset_fails() {
        let result = RecommendationOrchestrator::load(
            Path::new("does/not/exist.csv"),
            IndexConfig::default(),
            Arc::new(NoopResolver),
        )
        .await;
        assert!(result.is_err());
    }
}
