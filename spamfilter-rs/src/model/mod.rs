//! External model capabilities
//!
//! The pipeline consumes a trained vectorizer and classifier through
//! narrow traits so alternate implementations can be substituted
//! without touching the orchestrator.

pub mod bundle;
pub mod classifier;
pub mod vectorizer;

pub use bundle::ModelBundle;
pub use classifier::{Classifier, MultinomialNb};
pub use vectorizer::{CountVectorizer, Vectorizer};

#[cfg(test)]
pub use classifier::MockClassifier;
#[cfg(test)]
pub use vectorizer::MockVectorizer;
