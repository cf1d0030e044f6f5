//! Text normalization for the model layer
//!
//! Canonicalizes raw email text into the stemmed token stream the
//! vectorizer was trained on: truncate, strip punctuation, lowercase,
//! drop stop words, Porter-stem, re-join.

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

/// Inputs are capped at this many characters before normalization,
/// matching the training pipeline.
pub const MAX_TEXT_LEN: usize = 3000;

/// Standard English stop-word list (the one the model was trained with).
static STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Deterministic text normalizer.
///
/// Pure function of its input and the static stop-word/stemmer tables;
/// safe to share across requests.
pub struct TextNormalizer {
    stemmer: Stemmer,
    stop_words: HashSet<&'static str>,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Normalize raw text into a space-joined stream of stemmed tokens.
    ///
    /// Idempotent: re-normalizing already-normalized text is a no-op.
    pub fn normalize(&self, text: &str) -> String {
        let truncated: String = text.chars().take(MAX_TEXT_LEN).collect();

        // Keep ASCII letters, digits, whitespace and `$` (matches training);
        // everything else becomes a token separator.
        let cleaned: String = truncated
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c.is_whitespace() || c == '$' {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        cleaned
            .to_lowercase()
            .split_whitespace()
            .filter(|token| !self.stop_words.contains(token))
            .map(|token| self.stemmer.stem(token).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
