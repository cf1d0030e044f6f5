//! Layered decision pipeline
//!
//! Deterministic override rules (whitelist, known services, spam
//! keywords) short-circuiting a probabilistic text classifier, plus the
//! normalization path feeding it.

pub mod normalize;
pub mod pipeline;
pub mod rules;
pub mod types;

pub use normalize::{TextNormalizer, MAX_TEXT_LEN};
pub use pipeline::SpamFilter;
pub use rules::TrustedDomains;
pub use types::{Email, Verdict, VerdictLabel};
