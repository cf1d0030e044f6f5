//! Decision orchestrator
//!
//! Runs the override layers in fixed order (whitelist, known service,
//! spam keywords) and falls through to the model layer only when none
//! fires. The first layer that fires is terminal for the request.

use tracing::debug;

use crate::config::FilterConfig;
use crate::error::{FilterError, Result};
use crate::filter::normalize::TextNormalizer;
use crate::filter::rules::{self, TrustedDomains};
use crate::filter::types::{Email, Verdict};
use crate::model::ModelBundle;

/// The layered spam filter.
///
/// Immutable after construction; every classification is a pure
/// computation over the static rule tables and the loaded model, so a
/// single instance is shared across concurrent requests without
/// locking.
pub struct SpamFilter {
    config: FilterConfig,
    trusted: TrustedDomains,
    normalizer: TextNormalizer,
    model: Option<ModelBundle>,
}

impl SpamFilter {
    pub fn new(config: FilterConfig, trusted: TrustedDomains, model: Option<ModelBundle>) -> Self {
        Self {
            config,
            trusted,
            normalizer: TextNormalizer::new(),
            model,
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn model_version(&self) -> Option<&str> {
        self.model.as_ref().map(|m| m.model_version.as_str())
    }

    pub fn trusted_domain_count(&self) -> usize {
        self.trusted.len()
    }

    /// Classify one email, returning exactly one verdict.
    ///
    /// A loaded model is a precondition for the whole request: while
    /// the artifacts are missing, every classification fails with
    /// [`FilterError::ModelUnavailable`], even for emails an override
    /// layer could have answered.
    pub fn classify(&self, email: &Email) -> Result<Verdict> {
        if self.model.is_none() {
            return Err(FilterError::ModelUnavailable);
        }

        if self.trusted.contains_sender(&email.sender) {
            debug!(sender = %email.sender, "whitelist layer fired");
            return Ok(Verdict::whitelisted());
        }

        if rules::is_known_service(&email.sender) {
            debug!(sender = %email.sender, "known-service layer fired");
            return Ok(Verdict::known_service());
        }

        if rules::has_spam_indicators(&email.subject, &email.body) {
            debug!(sender = %email.sender, "spam-keyword layer fired");
            return Ok(Verdict::keyword_spam());
        }

        self.classify_with_model(email)
    }

    fn classify_with_model(&self, email: &Email) -> Result<Verdict> {
        let model = self.model.as_ref().ok_or(FilterError::ModelUnavailable)?;

        let full_text = format!("{} {}", email.subject, email.body);
        let normalized = self.normalizer.normalize(&full_text);
        let features = model.vectorizer.transform(&normalized);
        let (p_ham, p_spam) = model.classifier.predict_probabilities(&features);

        debug!(
            p_spam,
            threshold = self.config.spam_threshold,
            "model layer probabilities"
        );

        // The decision uses the unrounded probability; rounding is a
        // presentation concern at the API boundary.
        if p_spam >= self.config.spam_threshold {
            Ok(Verdict::model_spam(p_spam))
        } else {
            Ok(Verdict::model_ham(p_ham))
        }
    }
}
