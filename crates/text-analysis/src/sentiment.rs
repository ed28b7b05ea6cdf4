//! Lexicon and rule-based sentiment scoring for review text.
//!
//! ## Algorithm
//! 1. Split on whitespace, trimming punctuation from word edges
//! 2. Look up each word's valence in the lexicon
//! 3. Adjust for the three preceding words: boosters ("very", "barely")
//!    scale the valence, negations ("not", "never") flip and damp it
//! 4. ALL-CAPS words get extra weight when the text mixes case
//! 5. After a contrastive "but", later words count 1.5x and earlier 0.5x
//! 6. Exclamation and repeated question marks push the sum further from 0
//! 7. Squash the sum into [-1, 1] with `s / sqrt(s^2 + 15)`

use crate::lexicon::{BOOSTERS, NEGATIONS, VALENCE};
use data_loader::SentimentLabel;
use std::collections::{HashMap, HashSet};

/// Compound score at or above which text is positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which text is negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

const CAPS_INCR: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_INCR: f64 = 0.292;
const QUESTION_INCR: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;

/// Result of scoring one text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    /// Overall polarity in [-1, 1]
    pub compound: f64,
    pub label: SentimentLabel,
    /// Compound mapped onto 0..=100
    pub percentage: u8,
}

/// Map a compound score onto the three-way label (both thresholds inclusive)
pub fn label_for(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Map a compound score onto 0..=100: `round((compound + 1) * 50)`
pub fn to_percentage(compound: f64) -> u8 {
    ((compound + 1.0) * 50.0).round().clamp(0.0, 100.0) as u8
}

/// Rule-based sentiment analyzer.
///
/// Holds its word lists in hash maps; build one and reuse it across texts.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: VALENCE.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Score a text: compound polarity, label and percentage.
    ///
    /// Empty text scores as neutral / 50.
    pub fn score(&self, text: &str) -> SentimentScore {
        let compound = self.compound(text);
        SentimentScore {
            compound,
            label: label_for(compound),
            percentage: to_percentage(compound),
        }
    }

    /// Compound polarity of a text in [-1, 1]
    pub fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_differential = has_cap_differential(&tokens);

        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|i| self.valence_at(i, &tokens, &lowered, cap_differential))
            .collect();

        apply_but_rule(&lowered, &mut valences);

        let mut sum: f64 = valences.iter().sum();
        if sum > 0.0 {
            sum += punctuation_emphasis(text);
        } else if sum < 0.0 {
            sum -= punctuation_emphasis(text);
        }

        normalize_sum(sum)
    }

    /// Valence of the token at `i` after boosters, negation and caps
    fn valence_at(
        &self,
        i: usize,
        tokens: &[&str],
        lowered: &[String],
        cap_differential: bool,
    ) -> f64 {
        let word = lowered[i].as_str();

        // Boosters only modify their neighbours
        if self.boosters.contains_key(word) {
            return 0.0;
        }
        let Some(&base) = self.lexicon.get(word) else {
            return 0.0;
        };

        let mut valence = base;
        if cap_differential && is_all_caps(tokens[i]) {
            valence += CAPS_INCR * valence.signum();
        }

        for distance in 1..=3 {
            if i < distance {
                break;
            }
            let prev = lowered[i - distance].as_str();
            // A preceding sentiment word carries its own score
            if self.lexicon.contains_key(prev) {
                continue;
            }

            let damping = match distance {
                1 => 1.0,
                2 => 0.95,
                _ => 0.9,
            };
            valence += damping
                * self.booster_scalar(prev, tokens[i - distance], valence, cap_differential);

            if self.is_negation(prev) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence
    }

    /// How much a booster word shifts the valence that follows it
    fn booster_scalar(&self, lowered: &str, original: &str, valence: f64, cap_differential: bool) -> f64 {
        let Some(&boost) = self.boosters.get(lowered) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -boost } else { boost };
        if cap_differential && is_all_caps(original) {
            scalar += if valence > 0.0 { CAPS_INCR } else { -CAPS_INCR };
        }
        scalar
    }

    fn is_negation(&self, lowered: &str) -> bool {
        if lowered.contains("n't") {
            return true;
        }
        let bare: String = lowered.chars().filter(|&c| c != '\'').collect();
        self.negations.contains(bare.as_str())
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Whitespace tokens with edge punctuation trimmed.
///
/// A token whose trimmed form is two characters or fewer is kept as-is so
/// emoticons like ":)" survive; single characters are dropped.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 { token } else { stripped }
        })
        .filter(|token| token.chars().count() > 1)
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    let mut letters = token.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(|c| c.is_uppercase())
}

/// True when some, but not all, tokens are shouted
fn has_cap_differential(tokens: &[&str]) -> bool {
    let shouted = tokens.iter().filter(|t| is_all_caps(t)).count();
    shouted > 0 && shouted < tokens.len()
}

fn apply_but_rule(lowered: &[String], valences: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, valence) in valences.iter_mut().enumerate() {
        if i < pivot {
            *valence *= 0.5;
        } else if i > pivot {
            *valence *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => MAX_QUESTION_EMPHASIS,
    };
    exclamations * EXCLAMATION_INCR + question_emphasis
}

fn normalize_sum(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_neutral_fifty() {
        let analyzer = SentimentAnalyzer::new();
        let score = analyzer.score("");
        assert_eq!(score.compound, 0.0);
        assert_eq!(score.label, SentimentLabel::Neutral);
        assert_eq!(score.percentage, 50);
    }

    #[test]
    fn test_text_without_lexicon_words_is_neutral() {
        let analyzer = SentimentAnalyzer::new();
        let score = analyzer.score("The film runs two hours and was shot in Ohio.");
        assert_eq!(score.label, SentimentLabel::Neutral);
        assert_eq!(score.percentage, 50);
    }

    #[test]
    fn test_strongly_positive_text() {
        let analyzer = SentimentAnalyzer::new();
        let score =
            analyzer.score("This movie is absolutely wonderful, a brilliant and beautiful masterpiece!");
        assert_eq!(score.label, SentimentLabel::Positive);
        assert!(score.percentage > 50);
        assert!(score.compound > 0.9);
    }

    #[test]
    fn test_strongly_negative_text() {
        let analyzer = SentimentAnalyzer::new();
        let score = analyzer.score("A boring, stupid mess. The worst film of the year.");
        assert_eq!(score.label, SentimentLabel::Negative);
        assert!(score.percentage < 50);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let analyzer = SentimentAnalyzer::new();
        assert!(analyzer.compound("This film is good") > 0.0);
        assert!(analyzer.compound("This film is not good") < 0.0);
        assert!(analyzer.compound("This film isn't good") < 0.0);
    }

    #[test]
    fn test_booster_amplifies() {
        let analyzer = SentimentAnalyzer::new();
        let plain = analyzer.compound("The score is good");
        let boosted = analyzer.compound("The score is very good");
        let damped = analyzer.compound("The score is barely good");
        assert!(boosted > plain);
        assert!(damped < plain);
    }

    #[test]
    fn test_caps_emphasis() {
        let analyzer = SentimentAnalyzer::new();
        let plain = analyzer.compound("The acting was great");
        let shouted = analyzer.compound("The acting was GREAT");
        assert!(shouted > plain);
    }

    #[test]
    fn test_but_shifts_weight_to_second_clause() {
        let analyzer = SentimentAnalyzer::new();
        let score = analyzer.score("The plot was good but the acting was terrible");
        assert_eq!(score.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_exclamation_emphasis() {
        let analyzer = SentimentAnalyzer::new();
        assert!(analyzer.compound("What a great film!!!") > analyzer.compound("What a great film"));
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(label_for(POSITIVE_THRESHOLD), SentimentLabel::Positive);
        assert_eq!(label_for(NEGATIVE_THRESHOLD), SentimentLabel::Negative);
        assert_eq!(label_for(0.049), SentimentLabel::Neutral);
        assert_eq!(label_for(-0.049), SentimentLabel::Neutral);
        assert_eq!(label_for(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_percentage_mapping() {
        assert_eq!(to_percentage(-1.0), 0);
        assert_eq!(to_percentage(0.0), 50);
        assert_eq!(to_percentage(0.5), 75);
        assert_eq!(to_percentage(1.0), 100);
        // Out-of-range input is clamped
        assert_eq!(to_percentage(3.0), 100);
        assert_eq!(to_percentage(-3.0), 0);
    }

    #[test]
    fn test_compound_stays_in_range() {
        let analyzer = SentimentAnalyzer::new();
        let gushing = "great ".repeat(500);
        let compound = analyzer.compound(&gushing);
        assert!(compound <= 1.0 && compound > 0.99);
    }
}
