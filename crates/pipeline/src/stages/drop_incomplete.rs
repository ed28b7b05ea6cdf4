//! Stage that drops records missing a field the recommender needs.

use crate::traits::Stage;
use anyhow::Result;
use data_loader::MovieRecord;
use tracing::debug;

/// Removes records with an empty title, overview, genres, cast, keywords,
/// director or reviews field.
///
/// Whitespace-only text counts as empty.
pub struct DropIncompleteStage;

impl DropIncompleteStage {
    fn is_complete(record: &MovieRecord) -> bool {
        [
            &record.original_title,
            &record.overview,
            &record.genres,
            &record.cast,
            &record.keywords,
            &record.director,
            &record.reviews,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

impl Stage for DropIncompleteStage {
    fn name(&self) -> &str {
        "DropIncompleteStage"
    }

    fn apply(&self, records: Vec<MovieRecord>) -> Result<Vec<MovieRecord>> {
        let before = records.len();
        let kept: Vec<MovieRecord> = records.into_iter().filter(Self::is_complete).collect();
        debug!("Dropped {} incomplete records", before - kept.len());
        Ok(kept)
    }
}
