//! Stage that scores review sentiment.

use crate::traits::Stage;
use anyhow::Result;
use data_loader::MovieRecord;
use rayon::prelude::*;
use text_analysis::SentimentAnalyzer;

/// Scores each record's review text and stores the compound score, the
/// 0..=100 percentage and the label.
///
/// The standard pipeline runs this after `NormalizeTextStage`, so the
/// scores reflect the cleaned reviews that are also written out.
pub struct SentimentStage {
    analyzer: SentimentAnalyzer,
}

impl SentimentStage {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentAnalyzer::new(),
        }
    }
}

impl Default for SentimentStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for SentimentStage {
    fn name(&self) -> &str {
        "SentimentStage"
    }

    fn apply(&self, mut records: Vec<MovieRecord>) -> Result<Vec<MovieRecord>> {
        records.par_iter_mut().for_each(|record| {
            let score = self.analyzer.score(&record.reviews);
            record.sentiment_score_raw = score.compound;
            record.sentiment_score = score.percentage;
            record.sentiment = score.label;
        });
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::SentimentLabel;

    fn record(id: u64, reviews: &str) -> MovieRecord {
        MovieRecord {
            reviews: reviews.to_string(),
            ..MovieRecord::new(id, "Untitled")
        }
    }

    #[test]
    fn test_scores_each_record() {
        let out = SentimentStage::new()
            .apply(vec![
                record(1, "An absolutely wonderful, beautiful film. I loved it!"),
                record(2, "Boring, stupid and a total waste of time."),
                record(3, ""),
            ])
            .unwrap();

        assert_eq!(out[0].sentiment, SentimentLabel::Positive);
        assert!(out[0].sentiment_score > 50);
        assert!(out[0].sentiment_score_raw > 0.0);

        assert_eq!(out[1].sentiment, SentimentLabel::Negative);
        assert!(out[1].sentiment_score < 50);

        assert_eq!(out[2].sentiment, SentimentLabel::Neutral);
        assert_eq!(out[2].sentiment_score, 50);
    }

    #[test]
    fn test_preserves_order() {
        let records: Vec<MovieRecord> = (0..50).map(|i| record(i, "good")).collect();
        let out = SentimentStage::new().apply(records).unwrap();
        let ids: Vec<u64> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, (0..50).collect::<Vec<_>>());
    }
}
