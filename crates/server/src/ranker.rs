//! Title-to-recommendations ranking.
//!
//! ## Algorithm
//! 1. Resolve the title to a catalog row (case-insensitive, first row wins)
//! 2. Take the `k` most similar rows, excluding the movie itself
//! 3. Project each row into a `Recommendation`
//!
//! No network I/O happens here; enrichment is the orchestrator's job.

use data_loader::{Catalog, MovieId, SentimentLabel};
use similarity::SimilarityMatrix;
use tracing::{debug, instrument};

/// One ranked recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub movie_id: MovieId,
    pub title: String,
    /// First letter capitalized, rest lowercase
    pub overview: String,
    pub genres: String,
    pub sentiment: SentimentLabel,
    pub sentiment_score: u8,
    /// Cosine similarity to the query movie
    pub similarity: f64,
}

/// Result of a recommendation query
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendOutcome {
    /// Ranked best first; never contains the query movie
    Found(Vec<Recommendation>),
    /// No catalog title matched; echoes the input
    NotFound { title: String },
}

impl RecommendOutcome {
    /// Recommended titles in rank order, empty for `NotFound`
    pub fn titles(&self) -> Vec<&str> {
        match self {
            RecommendOutcome::Found(recs) => recs.iter().map(|r| r.title.as_str()).collect(),
            RecommendOutcome::NotFound { .. } => Vec::new(),
        }
    }
}

/// Recommend up to `k` movies similar to `title`.
///
/// An unknown title is `Ok(NotFound)`. The only error is a matrix that does
/// not cover the catalog, which a `CatalogIndex` never produces.
#[instrument(skip(catalog, matrix))]
pub fn recommend(
    title: &str,
    catalog: &Catalog,
    matrix: &SimilarityMatrix,
    k: usize,
) -> similarity::Result<RecommendOutcome> {
    let Some(row) = catalog.find_by_title(title) else {
        debug!("No catalog match for '{}'", title);
        return Ok(RecommendOutcome::NotFound {
            title: title.to_string(),
        });
    };

    let neighbours = matrix.top_k(row, k, true)?;
    let recommendations: Vec<Recommendation> = neighbours
        .into_iter()
        .filter_map(|(index, score)| {
            let record = catalog.get(index)?;
            Some(Recommendation {
                movie_id: record.id,
                title: record.original_title.clone(),
                overview: capitalize(&record.overview),
                genres: record.genres.clone(),
                sentiment: record.sentiment,
                sentiment_score: record.sentiment_score,
                similarity: score,
            })
        })
        .collect();

    debug!("Ranked {} recommendations for row {}", recommendations.len(), row);
    Ok(RecommendOutcome::Found(recommendations))
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
