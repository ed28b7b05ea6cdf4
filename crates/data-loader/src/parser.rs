//! Parser for the movie dataset CSV files.
//!
//! Two shapes of the same file are handled:
//! - the raw scraper output: id, original_title, overview, popularity,
//!   release_date, vote_average, genres, cast, director, keywords, reviews
//! - the finalized dataset: the raw columns plus content,
//!   sentiment_score_raw, sentiment_score and sentiment
//!
//! List-valued columns in the raw file arrive as bracketed list text
//! (`['Drama', 'Crime']`); they are kept verbatim here and flattened later
//! by text normalization.

use crate::error::{DataLoadError, Result};
use crate::types::MovieRecord;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Columns every raw dataset must carry
pub const RAW_COLUMNS: &[&str] = &[
    "id",
    "original_title",
    "overview",
    "genres",
    "cast",
    "director",
    "keywords",
    "reviews",
];

/// Columns every finalized dataset must carry
pub const FINAL_COLUMNS: &[&str] = &[
    "id",
    "original_title",
    "overview",
    "genres",
    "cast",
    "director",
    "keywords",
    "reviews",
    "content",
    "sentiment_score",
    "sentiment",
];

/// Finalized columns that must hold a value on every row
pub const FINAL_NON_EMPTY: &[&str] = &[
    "original_title",
    "overview",
    "genres",
    "cast",
    "keywords",
    "director",
    "content",
    "sentiment",
    "sentiment_score",
];

/// Parse the raw scraper output.
///
/// Empty cells are allowed here; the preparation pipeline drops
/// incomplete records.
pub fn parse_raw_records(path: &Path) -> Result<Vec<MovieRecord>> {
    read_records(path, RAW_COLUMNS, &[])
}

/// Parse a finalized dataset (output of the preparation pipeline)
pub fn parse_records(path: &Path) -> Result<Vec<MovieRecord>> {
    read_records(path, FINAL_COLUMNS, FINAL_NON_EMPTY)
}

/// Write records in the finalized column layout
pub fn write_records(path: &Path, records: &[MovieRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    debug!("Wrote {} records to {:?}", records.len(), path);
    Ok(())
}

fn read_records(path: &Path, required: &[&str], non_empty: &[&str]) -> Result<Vec<MovieRecord>> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let mut reader = csv::Reader::from_reader(file);

    // Check the header before touching any row so a wrong file fails fast
    let headers = reader.headers()?.clone();
    let position_of = |column: &str| headers.iter().position(|h| h.trim() == column);
    for column in required {
        if position_of(*column).is_none() {
            return Err(DataLoadError::InvalidDataset(format!(
                "{} has no '{}' column",
                file_name, column
            )));
        }
    }
    let non_empty: Vec<(&str, usize)> = non_empty
        .iter()
        .filter_map(|column| position_of(*column).map(|i| (*column, i)))
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line() as usize).unwrap_or(0);

        if let Some((column, _)) = non_empty
            .iter()
            .find(|(_, i)| row.get(*i).is_none_or(|value| value.trim().is_empty()))
        {
            return Err(DataLoadError::InvalidDataset(format!(
                "{} line {}: '{}' is empty",
                file_name, line, column
            )));
        }

        let record: MovieRecord =
            row.deserialize(Some(&headers))
                .map_err(|e| DataLoadError::ParseError {
                    file: file_name.clone(),
                    line,
                    reason: e.to_string(),
                })?;
        records.push(record);
    }

    debug!("Parsed {} records from {}", records.len(), file_name);
    Ok(records)
}
