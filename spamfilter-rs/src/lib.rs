//! spamfilter-rs: Layered email spam classification service
//!
//! Classifies an email (sender, subject, body) as spam or legitimate
//! through a layered decision pipeline: deterministic override rules
//! that can short-circuit a trained probabilistic classifier.
//!
//! # Pipeline
//!
//! 1. **Whitelist**: sender domain exactly matches the operator's
//!    trusted-domain list
//! 2. **Known services**: sender domain contains a recognized
//!    financial/transactional provider domain
//! 3. **Spam keywords**: subject+body contain two or more strong spam
//!    indicator phrases
//! 4. **Model**: stop-word removal + Porter stemming, bag-of-words
//!    vectorization and a Multinomial Naive Bayes classifier with a
//!    configurable spam threshold
//!
//! The first layer that fires is terminal; every request yields exactly
//! one verdict.
//!
//! # Example
//!
//! ```no_run
//! use spamfilter_rs::config::Config;
//! use spamfilter_rs::filter::{Email, SpamFilter, TrustedDomains};
//! use spamfilter_rs::model::ModelBundle;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let trusted = TrustedDomains::load(&config.whitelist.trusted_domains_path);
//!     let model = ModelBundle::load(&config.model)?;
//!
//!     let filter = SpamFilter::new(config.filter, trusted, model);
//!     let verdict = filter.classify(&Email {
//!         sender: "noreply@paypal.com".to_string(),
//!         subject: "Receipt".to_string(),
//!         body: "Your payment was sent.".to_string(),
//!     })?;
//!     println!("{:?}", verdict.label);
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`filter`]: Decision pipeline (rules, normalization, orchestrator)
//! - [`model`]: Trained vectorizer/classifier capabilities
//! - [`api`]: HTTP API boundary

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;

// Re-export commonly used types
pub use config::Config;
pub use error::{FilterError, Result};
pub use filter::{Email, SpamFilter, Verdict, VerdictLabel};
