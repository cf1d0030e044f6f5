//! Feature vectorizer capability
//!
//! Maps normalized text to the fixed-length numeric vector the
//! classifier was trained on.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{FilterError, Result};

/// Text-to-feature-vector capability. Deterministic and pure; output
/// dimensionality must match the classifier's expected input.
#[cfg_attr(test, mockall::automock)]
pub trait Vectorizer: Send + Sync {
    fn transform(&self, text: &str) -> Vec<f64>;
}

/// Bag-of-words vectorizer backed by a trained vocabulary.
///
/// The vocabulary is exported by the offline training pipeline as a
/// JSON artifact mapping token to feature index.
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    vocabulary: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
struct VectorizerArtifact {
    vocabulary: HashMap<String, usize>,
}

impl CountVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>) -> Result<Self> {
        let size = vocabulary.len();
        for (token, &index) in &vocabulary {
            if index >= size {
                return Err(FilterError::Model(format!(
                    "vocabulary index {} for token {:?} out of range (size {})",
                    index, token, size
                )));
            }
        }
        Ok(Self { vocabulary })
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let artifact: VectorizerArtifact = serde_json::from_str(content)?;
        Self::new(artifact.vocabulary)
    }

    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Vectorizer for CountVectorizer {
    fn transform(&self, text: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.vocabulary.len()];
        for token in text.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                features[index] += 1.0;
            }
        }
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer() -> CountVectorizer {
        CountVectorizer::from_json(r#"{"vocabulary": {"free": 0, "lunch": 1, "claim": 2}}"#)
            .unwrap()
    }

    #[test]
    fn test_counts_known_tokens() {
        let v = vectorizer();
        assert_eq!(v.transform("free lunch free"), vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_ignores_unknown_tokens() {
        let v = vectorizer();
        assert_eq!(v.transform("totally unknown words"), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_text() {
        let v = vectorizer();
        assert_eq!(v.transform(""), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let err = CountVectorizer::from_json(r#"{"vocabulary": {"free": 7}}"#).unwrap_err();
        assert!(matches!(err, FilterError::Model(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(CountVectorizer::from_json("not json").is_err());
    }
}
