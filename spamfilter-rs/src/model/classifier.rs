//! Probabilistic classifier capability
//!
//! Maps a feature vector to ham/spam class probabilities.

use serde::Deserialize;

use crate::error::{FilterError, Result};

/// Classifier capability. Given the same trained parameters the output
/// is deterministic, and the returned pair sums to 1.
#[cfg_attr(test, mockall::automock)]
pub trait Classifier: Send + Sync {
    /// Returns `(p_ham, p_spam)` for the given feature vector.
    fn predict_probabilities(&self, features: &[f64]) -> (f64, f64);
}

/// Multinomial Naive Bayes over bag-of-words counts.
///
/// Parameters are exported by the offline training pipeline as a JSON
/// artifact: per-class log priors and per-class/per-feature log
/// likelihoods, class order `[ham, spam]`.
#[derive(Debug, Clone, Deserialize)]
pub struct MultinomialNb {
    class_log_prior: [f64; 2],
    feature_log_prob: Vec<Vec<f64>>,
    #[serde(default = "default_model_version")]
    model_version: String,
}

fn default_model_version() -> String {
    "multinomial-nb".to_string()
}

impl MultinomialNb {
    pub fn from_json(content: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(content)?;
        if model.feature_log_prob.len() != 2 {
            return Err(FilterError::Model(format!(
                "expected 2 classes of feature log-probabilities, got {}",
                model.feature_log_prob.len()
            )));
        }
        if model.feature_log_prob[0].len() != model.feature_log_prob[1].len() {
            return Err(FilterError::Model(
                "ham and spam feature log-probability rows differ in length".to_string(),
            ));
        }
        Ok(model)
    }

    pub fn feature_count(&self) -> usize {
        self.feature_log_prob[0].len()
    }

    pub fn version(&self) -> &str {
        &self.model_version
    }
}

impl Classifier for MultinomialNb {
    fn predict_probabilities(&self, features: &[f64]) -> (f64, f64) {
        // Joint log-likelihood per class, then normalize back to
        // probabilities with a max shift for numeric stability.
        let mut joint = [0.0f64; 2];
        for (class, row) in self.feature_log_prob.iter().enumerate() {
            let log_likelihood: f64 = features
                .iter()
                .zip(row)
                .map(|(count, log_prob)| count * log_prob)
                .sum();
            joint[class] = self.class_log_prior[class] + log_likelihood;
        }

        let max = joint[0].max(joint[1]);
        let exp_ham = (joint[0] - max).exp();
        let exp_spam = (joint[1] - max).exp();
        let total = exp_ham + exp_spam;

        (exp_ham / total, exp_spam / total)
    }
}
