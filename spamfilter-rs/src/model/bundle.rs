//! Trained model loading
//!
//! Loads the classifier and vectorizer artifacts produced by the
//! offline training pipeline. Absent artifacts are a degraded state
//! (requests fail with "model not loaded"), malformed artifacts are a
//! startup error.

use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ModelConfig;
use crate::error::{FilterError, Result};
use crate::model::classifier::{Classifier, MultinomialNb};
use crate::model::vectorizer::{CountVectorizer, Vectorizer};

/// A trained vectorizer/classifier pair, shared read-only across
/// requests.
pub struct ModelBundle {
    pub vectorizer: Arc<dyn Vectorizer>,
    pub classifier: Arc<dyn Classifier>,
    pub model_version: String,
}

impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle")
            .field("model_version", &self.model_version)
            .finish_non_exhaustive()
    }
}

impl ModelBundle {
    /// Load both artifacts from disk.
    ///
    /// Returns `Ok(None)` when either file is missing (train the model
    /// first); consistency problems between the artifacts are errors.
    pub fn load(config: &ModelConfig) -> Result<Option<Self>> {
        let classifier_path = Path::new(&config.classifier_path);
        let vectorizer_path = Path::new(&config.vectorizer_path);

        if !classifier_path.exists() || !vectorizer_path.exists() {
            warn!(
                classifier = %classifier_path.display(),
                vectorizer = %vectorizer_path.display(),
                "model or vectorizer artifact not found, train the model first"
            );
            return Ok(None);
        }

        let vectorizer = CountVectorizer::from_json(&std::fs::read_to_string(vectorizer_path)?)?;
        let classifier = MultinomialNb::from_json(&std::fs::read_to_string(classifier_path)?)?;

        if classifier.feature_count() != vectorizer.vocab_size() {
            return Err(FilterError::Model(format!(
                "classifier expects {} features but vocabulary has {} tokens",
                classifier.feature_count(),
                vectorizer.vocab_size()
            )));
        }

        let model_version = classifier.version().to_string();
        info!(
            version = %model_version,
            features = vectorizer.vocab_size(),
            "model loaded"
        );

        Ok(Some(Self {
            vectorizer: Arc::new(vectorizer),
            classifier: Arc::new(classifier),
            model_version,
        }))
    }

    /// Assemble a bundle from already-built capabilities. Used by tests
    /// and by callers substituting alternate implementations.
    pub fn from_parts(
        vectorizer: Arc<dyn Vectorizer>,
        classifier: Arc<dyn Classifier>,
        model_version: &str,
    ) -> Self {
        Self {
            vectorizer,
            classifier,
            model_version: model_version.to_string(),
        }
    }
}
