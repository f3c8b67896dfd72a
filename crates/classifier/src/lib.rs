//! # Classifier
//!
//! Lexicon-based sentiment classifier.
//!
//! Scores a text by summing per-token valences from an embedded lexicon,
//! applying negation and booster adjustments, then normalizing the sum into
//! a compound score in (-1, 1). The compound score is cut into labels at
//! configurable thresholds (default ±0.05).
//!
//! Lexicon lookup tables are built once at construction; `classify` itself
//! is allocation-light and lock-free, so one instance can be shared across
//! the whole run.

mod lexicon;

use std::collections::{HashMap, HashSet};

use contracts::{Classifier, ClassifierConfig, ContractError, Label};
use tracing::trace;

/// Valence scale applied to a negated token
const NEGATION_SCALAR: f64 = -0.74;

/// Normalization constant for the compound score
const NORMALIZATION_ALPHA: f64 = 15.0;

/// How many preceding tokens are scanned for negators/boosters
const CONTEXT_WINDOW: usize = 3;

/// Lexicon-based sentiment classifier
pub struct LexiconClassifier {
    valences: HashMap<&'static str, f64>,
    negators: HashSet<&'static str>,
    boosters: HashMap<&'static str, f64>,
    config: ClassifierConfig,
}

impl LexiconClassifier {
    /// Build a classifier with the given thresholds.
    ///
    /// Construction hoists all lexicon indexing; call it once per run and
    /// reuse the instance.
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            valences: lexicon::LEXICON.iter().copied().collect(),
            negators: lexicon::NEGATORS.iter().copied().collect(),
            boosters: lexicon::BOOSTERS.iter().copied().collect(),
            config,
        }
    }

    /// Build a classifier with the default ±0.05 thresholds.
    pub fn with_defaults() -> Self {
        Self::new(ClassifierConfig::default())
    }

    /// Compound score for a text, in (-1, 1).
    ///
    /// 0.0 for texts containing no lexicon words.
    pub fn compound_score(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut sum = 0.0;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = self.valences.get(token.as_str()) else {
                continue;
            };

            let mut valence = valence;
            let window_start = i.saturating_sub(CONTEXT_WINDOW);
            for prior in &tokens[window_start..i] {
                if self.negators.contains(prior.as_str()) {
                    valence *= NEGATION_SCALAR;
                } else if let Some(&boost) = self.boosters.get(prior.as_str()) {
                    // Boost acts on magnitude: dampeners pull toward zero.
                    valence += if valence >= 0.0 { boost } else { -boost };
                }
            }

            sum += valence;
        }

        normalize(sum)
    }
}

impl Classifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Result<Label, ContractError> {
        let score = self.compound_score(text);

        let label = if score >= self.config.positive_threshold {
            Label::Positive
        } else if score <= self.config.negative_threshold {
            Label::Negative
        } else {
            Label::Neutral
        };

        trace!(score = format!("{score:.4}"), label = %label, "text classified");
        Ok(label)
    }
}

/// Lowercase alphanumeric tokens, apostrophes stripped ("don't" -> "dont").
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase().replace('\'', ""))
        .collect()
}

/// Map an unbounded valence sum into (-1, 1).
fn normalize(sum: f64) -> f64 {
    sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Label {
        LexiconClassifier::with_defaults().classify(text).unwrap()
    }

    #[test]
    fn test_positive_text() {
        assert_eq!(classify("I love it"), Label::Positive);
        assert_eq!(classify("This is a great product, works perfect"), Label::Positive);
    }

    #[test]
    fn test_negative_text() {
        assert_eq!(classify("terrible"), Label::Negative);
        assert_eq!(classify("what an awful, useless mess"), Label::Negative);
    }

    #[test]
    fn test_neutral_text() {
        assert_eq!(classify("it exists"), Label::Neutral);
        assert_eq!(classify("the box arrived on tuesday"), Label::Neutral);
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert_eq!(classify("good"), Label::Positive);
        assert_eq!(classify("not good"), Label::Negative);
        assert_eq!(classify("this was not bad at all"), Label::Positive);
    }

    #[test]
    fn test_booster_increases_magnitude() {
        let clf = LexiconClassifier::with_defaults();
        let plain = clf.compound_score("good");
        let boosted = clf.compound_score("very good");
        assert!(boosted > plain, "boosted {boosted} <= plain {plain}");
    }

    #[test]
    fn test_deterministic() {
        let clf = LexiconClassifier::with_defaults();
        let a = clf.compound_score("a lovely but slightly slow device");
        let b = clf.compound_score("a lovely but slightly slow device");
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_thresholds() {
        // With a wide neutral band, mildly positive text reads neutral.
        let clf = LexiconClassifier::new(ClassifierConfig {
            positive_threshold: 0.9,
            negative_threshold: -0.9,
        });
        assert_eq!(clf.classify("good").unwrap(), Label::Neutral);
    }

    #[test]
    fn test_normalize_bounds() {
        assert!(normalize(1000.0) < 1.0);
        assert!(normalize(-1000.0) > -1.0);
        assert_eq!(normalize(0.0), 0.0);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(tokenize("Don't stop!"), vec!["dont", "stop"]);
    }
}
