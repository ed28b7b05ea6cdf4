//! Catalog building and lookup logic.
//!
//! This module builds the `Catalog` from parsed records:
//! - validate required fields
//! - build the id and lowercased-title indices
//! - answer search-suggestion queries over titles

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Default cap on search suggestions
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

impl Catalog {
    /// Load a finalized dataset from disk and build the catalog
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie dataset from {:?}", path);
        let records = parser::parse_records(path)?;
        info!("Loaded {} records", records.len());
        Self::from_records(records)
    }

    /// Build a catalog from records, keeping their order as the row order.
    ///
    /// Fails on the first record that breaks a dataset invariant. Duplicate
    /// titles are allowed: they are logged and the first row keeps the title.
    pub fn from_records(records: Vec<MovieRecord>) -> Result<Self> {
        let mut id_index = HashMap::with_capacity(records.len());
        let mut title_index: HashMap<String, usize> = HashMap::with_capacity(records.len());

        for (row, record) in records.iter().enumerate() {
            validate_record(record)?;

            if id_index.insert(record.id, row).is_some() {
                return Err(DataLoadError::ValidationError(format!(
                    "duplicate movie id {}",
                    record.id
                )));
            }

            let key = record.original_title.to_lowercase();
            if let Some(&first) = title_index.get(&key) {
                warn!(
                    "Duplicate title '{}' at rows {} and {}; lookups resolve to row {}",
                    record.original_title, first, row, first
                );
            } else {
                title_index.insert(key, row);
            }
        }

        Ok(Self {
            records,
            id_index,
            title_index,
        })
    }

    /// Titles containing `query`, ignoring case, in catalog order.
    ///
    /// An empty query matches every title.
    pub fn search_suggestions(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.original_title.to_lowercase().contains(&query))
            .map(|r| r.original_title.as_str())
            .take(limit)
            .collect()
    }
}

/// Check the invariants a single record must satisfy to be served
fn validate_record(record: &MovieRecord) -> Result<()> {
    let required = [
        ("original_title", &record.original_title),
        ("overview", &record.overview),
        ("genres", &record.genres),
        ("cast", &record.cast),
        ("keywords", &record.keywords),
        ("director", &record.director),
        ("content", &record.content),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(DataLoadError::InvalidDataset(format!(
            "record {} has an empty {}",
            record.id, field
        )));
    }
    if record.sentiment_score > 100 {
        return Err(DataLoadError::InvalidValue {
            field: "sentiment_score".to_string(),
            value: record.sentiment_score.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: MovieId, title: &str) -> MovieRecord {
        MovieRecord {
            overview: "an overview".to_string(),
            genres: "drama".to_string(),
            cast: "some actor".to_string(),
            keywords: "keyword".to_string(),
            director: "some director".to_string(),
            content: format!("content for {}", title.to_lowercase()),
            ..MovieRecord::new(id, title)
        }
    }

    #[test]
    fn test_find_by_title_ignores_case() {
        let catalog = Catalog::from_records(vec![
            record(1, "The Godfather"),
            record(2, "Goodfellas"),
        ])
        .unwrap();

        assert_eq!(catalog.find_by_title("the godfather"), Some(0));
        assert_eq!(catalog.find_by_title("GOODFELLAS"), Some(1));
        assert_eq!(catalog.find_by_title("Casino"), None);
    }

    #[test]
    fn test_duplicate_title_first_row_wins() {
        let catalog = Catalog::from_records(vec![
            record(1, "Solaris"),
            record(2, "Heat"),
            record(3, "SOLARIS"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.find_by_title("solaris"), Some(0));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let err = Catalog::from_records(vec![record(1, "Heat"), record(1, "Ronin")]).unwrap_err();
        assert!(matches!(err, DataLoadError::ValidationError(_)));
    }

    #[test]
    fn test_empty_title_is_invalid_dataset() {
        let err = Catalog::from_records(vec![record(1, "  ")]).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidDataset(_)));
    }

    #[test]
    fn test_every_required_field_is_checked() {
        let blank_fields: [fn(&mut MovieRecord); 6] = [
            |r| r.overview.clear(),
            |r| r.genres = "  ".to_string(),
            |r| r.cast.clear(),
            |r| r.keywords.clear(),
            |r| r.director = "\t".to_string(),
            |r| r.content.clear(),
        ];

        for blank in blank_fields {
            let mut incomplete = record(2, "Ronin");
            blank(&mut incomplete);

            let err = Catalog::from_records(vec![record(1, "Heat"), incomplete]).unwrap_err();
            assert!(matches!(err, DataLoadError::InvalidDataset(_)), "{err}");
        }
    }

    #[test]
    fn test_invalid_dataset_names_the_field() {
        let mut incomplete = record(7, "Se7en");
        incomplete.director.clear();

        let err = Catalog::from_records(vec![incomplete]).unwrap_err();
        assert!(err.to_string().contains("record 7 has an empty director"));
    }

    #[test]
    fn test_search_suggestions() {
        let catalog = Catalog::from_records(vec![
            record(1, "The Godfather"),
            record(2, "The Godfather Part II"),
            record(3, "Goodfellas"),
        ])
        .unwrap();

        assert_eq!(
            catalog.search_suggestions("GODFATHER", DEFAULT_SUGGESTION_LIMIT),
            vec!["The Godfather", "The Godfather Part II"]
        );
        assert_eq!(catalog.search_suggestions("the", 1), vec!["The Godfather"]);
        assert!(catalog.search_suggestions("zzz", 10).is_empty());
    }

    #[test]
    fn test_suggestions_capped() {
        let records = (0..25).map(|i| record(i, &format!("Movie {}", i))).collect();
        let catalog = Catalog::from_records(records).unwrap();

        assert_eq!(catalog.search_suggestions("movie", DEFAULT_SUGGESTION_LIMIT).len(), 10);
    }
}
