//! Stage that normalizes the free-text fields.

use crate::traits::Stage;
use anyhow::Result;
use data_loader::MovieRecord;
use rayon::prelude::*;
use text_analysis::normalize;

/// Normalizes reviews, overview, genres, cast, keywords and director in
/// place. The title is left alone: it stays the display and lookup key.
pub struct NormalizeTextStage;

impl Stage for NormalizeTextStage {
    fn name(&self) -> &str {
        "NormalizeTextStage"
    }

    fn apply(&self, mut records: Vec<MovieRecord>) -> Result<Vec<MovieRecord>> {
        records.par_iter_mut().for_each(|record| {
            for field in [
                &mut record.reviews,
                &mut record.overview,
                &mut record.genres,
                &mut record.cast,
                &mut record.keywords,
                &mut record.director,
            ] {
                *field = normalize(field);
            }
        });
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_text_fields() {
        let record = MovieRecord {
            overview: "The aging patriarch of an organized crime dynasty...".to_string(),
            genres: "['Drama', 'Crime']".to_string(),
            cast: "['Marlon Brando', 'Al Pacino']".to_string(),
            director: "Francis Ford Coppola".to_string(),
            keywords: "['mafia', 'new york']".to_string(),
            reviews: "A MASTERPIECE!".to_string(),
            ..MovieRecord::new(238, "The Godfather")
        };

        let out = NormalizeTextStage.apply(vec![record]).unwrap();
        let r = &out[0];

        assert_eq!(r.original_title, "The Godfather");
        assert_eq!(r.overview, "aging patriarch organized crime dynasty");
        assert_eq!(r.genres, "drama crime");
        assert_eq!(r.cast, "marlon brando al pacino");
        assert_eq!(r.director, "francis ford coppola");
        assert_eq!(r.keywords, "mafia new york");
        assert_eq!(r.reviews, "masterpiece");
    }
}
