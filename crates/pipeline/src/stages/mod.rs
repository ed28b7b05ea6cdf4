//! Stage implementations for the preparation pipeline.
//!
//! Each stage is one step from the raw scraped dataset to the finalized
//! one; `StagePipeline::standard()` runs them in the order listed here.

pub mod drop_incomplete;
pub mod deduplicate;
pub mod sentiment;
pub mod normalize_text;
pub mod build_content;

// Re-export for convenience
pub use build_content::BuildContentStage;
pub use deduplicate::DeduplicateStage;
pub use drop_incomplete::DropIncompleteStage;
pub use normalize_text::NormalizeTextStage;
pub use sentiment::SentimentStage;
