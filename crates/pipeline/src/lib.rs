//! Data preparation for the recommender.
//!
//! This crate provides:
//! - The Stage trait and the stages that turn scraped records into the
//!   finalized dataset
//! - StagePipeline for composing stages
//! - `prepare` / `prepare_file`, which run the standard pipeline and build
//!   the reviews vector space alongside it
//!
//! ## Architecture
//! Records flow through the stages in order:
//! 1. Incomplete and duplicate records are dropped
//! 2. Free-text fields are normalized
//! 3. Records left with an empty field are dropped
//! 4. The normalized reviews are scored for sentiment
//! 5. `content` is derived from the normalized fields
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::prepare_file;
//! use std::path::Path;
//!
//! let report = prepare_file(
//!     Path::new("data/movie_data.csv"),
//!     Path::new("data/movie_data_with_sentiment.csv"),
//!     5000,
//! )?;
//! println!("{} records, reviews space {}x{}", report.output_records,
//!     report.reviews_rows, report.reviews_terms);
//! ```

pub mod stage_pipeline;
pub mod stages;
pub mod traits;

// Re-export main types
pub use stage_pipeline::StagePipeline;
pub use traits::Stage;

use anyhow::{Context, Result};
use data_loader::{parser, MovieRecord};
use similarity::VectorSpace;
use std::path::Path;
use tracing::{info, instrument};

/// Finalized records plus the vector space built over their reviews
#[derive(Debug)]
pub struct PreparedDataset {
    pub records: Vec<MovieRecord>,
    pub reviews_space: VectorSpace,
}

/// Summary of a preparation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreparationReport {
    pub input_records: usize,
    pub output_records: usize,
    pub reviews_rows: usize,
    pub reviews_terms: usize,
}

impl PreparedDataset {
    pub fn report(&self, input_records: usize) -> PreparationReport {
        PreparationReport {
            input_records,
            output_records: self.records.len(),
            reviews_rows: self.reviews_space.len(),
            reviews_terms: self.reviews_space.vocabulary_len(),
        }
    }
}

/// Run the standard pipeline and build the reviews vector space.
///
/// Fails when no record survives with any review tokens, since the
/// reviews space cannot be built from an empty corpus.
#[instrument(skip(records), fields(input = records.len()))]
pub fn prepare(records: Vec<MovieRecord>, max_features: usize) -> Result<PreparedDataset> {
    let records = StagePipeline::standard().apply(records)?;

    let reviews: Vec<&str> = records.iter().map(|r| r.reviews.as_str()).collect();
    let reviews_space =
        VectorSpace::build(&reviews, max_features).context("building reviews vector space")?;

    info!(
        "Prepared {} records; reviews space {}x{}",
        records.len(),
        reviews_space.len(),
        reviews_space.vocabulary_len()
    );

    Ok(PreparedDataset {
        records,
        reviews_space,
    })
}

/// Read a raw dataset, prepare it and write the finalized dataset
pub fn prepare_file(input: &Path, output: &Path, max_features: usize) -> Result<PreparationReport> {
    let raw = parser::parse_raw_records(input)
        .with_context(|| format!("reading raw dataset {}", input.display()))?;
    let input_records = raw.len();

    let prepared = prepare(raw, max_features)?;

    parser::write_records(output, &prepared.records)
        .with_context(|| format!("writing finalized dataset {}", output.display()))?;
    info!("Wrote finalized dataset to {}", output.display());

    Ok(prepared.report(input_records))
}
