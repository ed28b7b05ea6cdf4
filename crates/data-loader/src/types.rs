//! Core domain types for the movie catalog.
//!
//! This module defines the per-movie record that flows through the whole
//! system, the sentiment label attached to it, and the `Catalog` that owns
//! the loaded record set.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::DataLoadError;

// =============================================================================
// Type Aliases
// =============================================================================

/// Stable identifier for a movie (the upstream movie database id)
pub type MovieId = u64;

// =============================================================================
// Sentiment
// =============================================================================

/// Three-way sentiment label derived from the compound review score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = DataLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "neutral" => Ok(SentimentLabel::Neutral),
            "negative" => Ok(SentimentLabel::Negative),
            _ => Err(DataLoadError::InvalidValue {
                field: "sentiment".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Movie Record
// =============================================================================

/// One movie as it appears in the dataset.
///
/// Field order matches the column order of the finalized CSV. The raw
/// scraper output has no `content` or sentiment columns; those fall back to
/// their defaults and are filled in by the preparation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub original_title: String,
    pub overview: String,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    pub genres: String,
    pub cast: String,
    pub director: String,
    pub keywords: String,
    pub reviews: String,
    /// Normalized overview + genres + cast + keywords + director.
    ///
    /// Always regenerated from the constituent fields, never edited directly.
    #[serde(default)]
    pub content: String,
    /// Compound polarity in [-1, 1]
    #[serde(default)]
    pub sentiment_score_raw: f64,
    /// Compound polarity mapped onto 0..=100
    #[serde(default = "default_sentiment_score")]
    pub sentiment_score: u8,
    #[serde(default)]
    pub sentiment: SentimentLabel,
}

fn default_sentiment_score() -> u8 {
    50
}

impl MovieRecord {
    /// Create a record with the given identity and every text field empty
    pub fn new(id: MovieId, original_title: impl Into<String>) -> Self {
        Self {
            id,
            original_title: original_title.into(),
            ..Self::default()
        }
    }
}

impl Default for MovieRecord {
    fn default() -> Self {
        Self {
            id: 0,
            original_title: String::new(),
            overview: String::new(),
            popularity: None,
            release_date: None,
            vote_average: None,
            genres: String::new(),
            cast: String::new(),
            director: String::new(),
            keywords: String::new(),
            reviews: String::new(),
            content: String::new(),
            sentiment_score_raw: 0.0,
            sentiment_score: default_sentiment_score(),
            sentiment: SentimentLabel::Neutral,
        }
    }
}

// =============================================================================
// Catalog - the loaded record set
// =============================================================================

/// Immutable, row-ordered record set.
///
/// Row `i` here is row `i` of every vector space and similarity matrix built
/// from this catalog, so the record order is never changed after load.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) records: Vec<MovieRecord>,
    /// Movie id -> row
    pub(crate) id_index: HashMap<MovieId, usize>,
    /// Lowercased title -> first row carrying that title
    pub(crate) title_index: HashMap<String, usize>,
}

impl Catalog {
    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in row order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Get the record at a row
    pub fn get(&self, row: usize) -> Option<&MovieRecord> {
        self.records.get(row)
    }

    /// Get a record by movie id
    pub fn get_by_id(&self, id: MovieId) -> Option<&MovieRecord> {
        self.id_index.get(&id).and_then(|&row| self.records.get(row))
    }

    /// Resolve a title to its row, ignoring case.
    ///
    /// When several records share a title the first one in row order wins.
    pub fn find_by_title(&self, title: &str) -> Option<usize> {
        self.title_index.get(&title.to_lowercase()).copied()
    }

    /// Content strings in row order, ready for vectorization
    pub fn contents(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.content.as_str()).collect()
    }
}
