//! Core trait for the data-preparation pipeline.
//!
//! A `Stage` is one step that turns the raw scraped records into the
//! finalized dataset: drop, deduplicate, score, normalize, derive.

use anyhow::Result;
use data_loader::MovieRecord;

/// One step of the preparation pipeline.
///
/// Stages take ownership of the records and hand back the survivors, so a
/// stage can drop, reorder or rewrite records without cloning.
pub trait Stage: Send + Sync {
    /// Name used in pipeline logs
    fn name(&self) -> &str;

    fn apply(&self, records: Vec<MovieRecord>) -> Result<Vec<MovieRecord>>;
}
