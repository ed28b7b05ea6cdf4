//! Stage that removes repeated records.

use crate::traits::Stage;
use anyhow::Result;
use data_loader::{MovieId, MovieRecord};
use std::collections::HashSet;
use tracing::debug;

/// Drops records whose id or review text was already seen.
///
/// The scraper sometimes emits the same movie twice, or attaches the same
/// review dump to several entries. The first occurrence is kept.
pub struct DeduplicateStage;

impl Stage for DeduplicateStage {
    fn name(&self) -> &str {
        "DeduplicateStage"
    }

    fn apply(&self, records: Vec<MovieRecord>) -> Result<Vec<MovieRecord>> {
        let before = records.len();
        let mut seen_ids: HashSet<MovieId> = HashSet::with_capacity(before);
        let mut seen_reviews: HashSet<String> = HashSet::with_capacity(before);

        let kept: Vec<MovieRecord> = records
            .into_iter()
            .filter(|record| {
                let new_id = seen_ids.insert(record.id);
                let new_reviews = seen_reviews.insert(record.reviews.clone());
                new_id && new_reviews
            })
            .collect();

        debug!("Dropped {} duplicate records", before - kept.len());
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: MovieId, title: &str, reviews: &str) -> MovieRecord {
        MovieRecord {
            reviews: reviews.to_string(),
            ..MovieRecord::new(id, title)
        }
    }

    #[test]
    fn test_drops_repeated_reviews_keeping_first() {
        let out = DeduplicateStage
            .apply(vec![
                record(1, "Heat", "Tense and stylish."),
                record(2, "Heat (re-release)", "Tense and stylish."),
                record(3, "Ronin", "Great car chases."),
            ])
            .unwrap();

        let ids: Vec<MovieId> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_drops_repeated_ids() {
        let out = DeduplicateStage
            .apply(vec![
                record(7, "Alien", "Terrifying."),
                record(7, "Alien", "Still terrifying."),
            ])
            .unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].reviews, "Terrifying.");
    }
}
