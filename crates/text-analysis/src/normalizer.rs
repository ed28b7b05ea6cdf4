//! Free-text normalization.
//!
//! Turns raw text (overviews, cast lists, review dumps) into the cleaned,
//! space-joined token stream the vector space is built over.

use crate::stopwords::is_stop_word;
use unicode_segmentation::UnicodeSegmentation;

/// Normalize free text into space-separated, stopword-free tokens.
///
/// Steps:
/// 1. Lowercase
/// 2. Drop every character that is not an ASCII letter or whitespace.
///    Nothing is substituted, so `"sci-fi"` becomes `"scifi"` and
///    `"fox42"` becomes `"fox"`.
/// 3. Split into words on Unicode word boundaries
/// 4. Drop English stopwords
/// 5. Join with single spaces
///
/// ```
/// use text_analysis::normalize;
///
/// assert_eq!(normalize("The QUICK, fox42!"), "quick fox");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    cleaned
        .unicode_words()
        .filter(|word| !is_stop_word(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize each part and join the non-empty results with single spaces
pub fn normalize_all<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .map(normalize)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_strips_digits_punctuation_and_stopwords() {
        assert_eq!(normalize("The QUICK, fox42!"), "quick fox");
    }

    #[test]
    fn test_adjacent_words_merge_when_separator_is_not_whitespace() {
        assert_eq!(normalize("Sci-Fi"), "scifi");
        assert_eq!(normalize("Action|Drama"), "actiondrama");
    }

    #[test]
    fn test_flattens_list_text() {
        assert_eq!(
            normalize("['Marlon Brando', 'Al Pacino', 'James Caan']"),
            "marlon brando al pacino james caan"
        );
    }

    #[test]
    fn test_non_ascii_letters_are_dropped() {
        assert_eq!(normalize("Amélie café"), "amlie caf");
    }

    #[test]
    fn test_only_stopwords() {
        assert_eq!(normalize("It is what it is, and that is all."), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("A family drama about the Corleone crime dynasty (1972).");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_all_skips_empty_parts() {
        assert_eq!(
            normalize_all(["A crime saga.", "", "['Drama', 'Crime']", "the"]),
            "crime saga drama crime"
        );
    }
}
