//! # Text Analysis Crate
//!
//! Text processing shared by the preparation pipeline and the server:
//!
//! - **normalizer**: lowercase, strip, tokenize and drop stopwords
//! - **stopwords**: the fixed English stopword list
//! - **sentiment**: rule-based review sentiment (compound, label, percentage)

pub mod normalizer;
pub mod sentiment;
pub mod stopwords;

mod lexicon;

pub use normalizer::{normalize, normalize_all};
pub use sentiment::{
    label_for, to_percentage, SentimentAnalyzer, SentimentScore, NEGATIVE_THRESHOLD,
    POSITIVE_THRESHOLD,
};
pub use stopwords::{english_stop_words, is_stop_word};
