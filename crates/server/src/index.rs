//! Precomputed recommendation state.
//!
//! A `CatalogIndex` owns the catalog, its content vector space and the
//! similarity matrix. It is built once, then shared read-only (usually
//! behind an `Arc`) by every query.

use anyhow::{Context, Result};
use data_loader::{parser, Catalog, MovieRecord, DEFAULT_SUGGESTION_LIMIT};
use similarity::{SimilarityMatrix, VectorSpace, DEFAULT_MAX_FEATURES};
use std::path::Path;
use std::time::Instant;
use tracing::{info, instrument};

use crate::ranker::{self, RecommendOutcome};

/// Default number of recommendations per query
pub const DEFAULT_TOP_K: usize = 10;

/// Engine parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    pub max_features: usize,
    pub top_k: usize,
}

impl IndexConfig {
    pub fn new() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Configure the vocabulary bound (default: 5000)
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Configure recommendations per query (default: 10)
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Catalog plus its content vector space and similarity matrix
#[derive(Debug)]
pub struct CatalogIndex {
    catalog: Catalog,
    space: VectorSpace,
    matrix: SimilarityMatrix,
    config: IndexConfig,
}

impl CatalogIndex {
    /// Build the index from finalized records.
    ///
    /// Fails if the records break a catalog invariant or the content corpus
    /// has no tokens. Nothing is returned half-built.
    #[instrument(skip(records), fields(records = records.len()))]
    pub fn build(records: Vec<MovieRecord>, config: IndexConfig) -> Result<Self> {
        let start = Instant::now();

        let catalog = Catalog::from_records(records).context("Invalid dataset")?;
        let space = VectorSpace::build(&catalog.contents(), config.max_features)
            .context("Failed to build content vector space")?;
        let matrix = SimilarityMatrix::build(&space);

        info!(
            "Index ready: {} movies, {} terms in {:.2?}",
            catalog.len(),
            space.vocabulary_len(),
            start.elapsed()
        );

        Ok(Self {
            catalog,
            space,
            matrix,
            config,
        })
    }

    /// Load a finalized dataset and build the index from it
    pub fn load(path: &Path, config: IndexConfig) -> Result<Self> {
        info!("Loading movie dataset from {}", path.display());
        let records = parser::parse_records(path)
            .with_context(|| format!("Failed to load dataset {}", path.display()))?;
        Self::build(records, config)
    }

    /// Recommend movies similar to `title`, `config.top_k` at most
    pub fn recommend(&self, title: &str) -> similarity::Result<RecommendOutcome> {
        self.recommend_with_limit(title, self.config.top_k)
    }

    pub fn recommend_with_limit(&self, title: &str, k: usize) -> similarity::Result<RecommendOutcome> {
        ranker::recommend(title, &self.catalog, &self.matrix, k)
    }

    /// Titles containing `query`, ignoring case, capped at 10
    pub fn search_suggestions(&self, query: &str) -> Vec<&str> {
        self.catalog.search_suggestions(query, DEFAULT_SUGGESTION_LIMIT)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vector_space(&self) -> &VectorSpace {
        &self.space
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    pub fn config(&self) -> IndexConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
