//! Stage that derives the `content` field.

use crate::traits::Stage;
use anyhow::Result;
use data_loader::MovieRecord;

/// Sets `content` to overview, genres, cast, keywords and director joined
/// by single spaces, skipping empty parts.
///
/// Runs after `NormalizeTextStage`, so `content` is always rebuilt from the
/// normalized fields and never carried over from input.
pub struct BuildContentStage;

impl BuildContentStage {
    pub fn content_of(record: &MovieRecord) -> String {
        [
            record.overview.as_str(),
            record.genres.as_str(),
            record.cast.as_str(),
            record.keywords.as_str(),
            record.director.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl Stage for BuildContentStage {
    fn name(&self) -> &str {
        "BuildContentStage"
    }

    fn apply(&self, mut records: Vec<MovieRecord>) -> Result<Vec<MovieRecord>> {
        for record in &mut records {
            record.content = Self::content_of(record);
        }
        Ok(records)
    }
}
