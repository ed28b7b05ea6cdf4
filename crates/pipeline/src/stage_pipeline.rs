//! The StagePipeline runs preparation stages in order.
//!
//! Stages are chained with the builder pattern; `StagePipeline::standard()`
//! assembles the default raw-to-finalized sequence.

use crate::stages::{
    BuildContentStage, DeduplicateStage, DropIncompleteStage, NormalizeTextStage, SentimentStage,
};
use crate::traits::Stage;
use anyhow::{Context, Result};
use data_loader::MovieRecord;
use tracing;

/// Chains stages together into a preparation pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = StagePipeline::new()
///     .add_stage(DropIncompleteStage)
///     .add_stage(DeduplicateStage)
///     .add_stage(SentimentStage::new());
///
/// let finalized = pipeline.apply(raw_records)?;
/// ```
pub struct StagePipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl StagePipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// The default raw-to-finalized sequence.
    ///
    /// Sentiment is scored on the normalized reviews. Normalization can
    /// empty a field (a keyword list of numbers, a cast of stopwords), so
    /// incomplete records are dropped a second time after it.
    pub fn standard() -> Self {
        Self::new()
            .add_stage(DropIncompleteStage)
            .add_stage(DeduplicateStage)
            .add_stage(NormalizeTextStage)
            .add_stage(DropIncompleteStage)
            .add_stage(SentimentStage::new())
            .add_stage(BuildContentStage)
    }

    /// Add a stage to the pipeline (builder pattern).
    pub fn add_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Names of the stages in run order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Apply all stages in sequence.
    ///
    /// Stops at the first failing stage; its name is attached to the error.
    pub fn apply(&self, records: Vec<MovieRecord>) -> Result<Vec<MovieRecord>> {
        let mut current = records;
        for stage in &self.stages {
            tracing::debug!(
                "Applying stage: {} (input count: {})",
                stage.name(),
                current.len()
            );
            current = stage
                .apply(current)
                .with_context(|| format!("stage {} failed", stage.name()))?;
            tracing::debug!(
                "Stage applied: {} (output count: {})",
                stage.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for StagePipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(id: u64, title: &str, reviews: &str) -> MovieRecord {
        MovieRecord {
            overview: "A heist goes wrong.".to_string(),
            genres: "['Crime']".to_string(),
            cast: "['Robert De Niro']".to_string(),
            director: "Michael Mann".to_string(),
            keywords: "['heist']".to_string(),
            reviews: reviews.to_string(),
            ..MovieRecord::new(id, title)
        }
    }

    struct FailingStage;

    impl Stage for FailingStage {
        fn name(&self) -> &str {
            "FailingStage"
        }

        fn apply(&self, _records: Vec<MovieRecord>) -> Result<Vec<MovieRecord>> {
            anyhow::bail!("boom")
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = StagePipeline::new();
        let records = vec![complete(1, "Heat", "great"), MovieRecord::new(2, "Ronin")];

        let out = pipeline.apply(records).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_single_stage() {
        let pipeline = StagePipeline::new().add_stage(DropIncompleteStage);
        let records = vec![complete(1, "Heat", "great"), MovieRecord::new(2, "Ronin")];

        let out = pipeline.apply(records).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);
    }

    #[test]
    fn test_standard_stage_order() {
        assert_eq!(
            StagePipeline::standard().stage_names(),
            vec![
                "DropIncompleteStage",
                "DeduplicateStage",
                "NormalizeTextStage",
                "DropIncompleteStage",
                "SentimentStage",
                "BuildContentStage"
            ]
        );
    }

    #[test]
    fn test_failing_stage_is_named_in_error() {
        let pipeline = StagePipeline::new()
            .add_stage(DropIncompleteStage)
            .add_stage(FailingStage);

        let err = pipeline.apply(vec![complete(1, "Heat", "great")]).unwrap_err();
        assert!(err.to_string().contains("FailingStage"));
    }
}
