//! Deterministic override layers
//!
//! Three ordered checks that can short-circuit the model: the
//! trusted-domain whitelist (exact domain match), known
//! financial/transactional services (domain substring match) and the
//! strong spam-keyword heuristic. The exact-vs-substring asymmetry
//! between the first two layers is deliberate: the whitelist is
//! operator-supplied data and must not over-match, while the
//! known-service list intentionally also catches sub-domains (at the
//! cost of look-alike superstrings such as `paypal.com.evil.net`, a
//! documented false-negative risk).

use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Domains of recognized financial/transactional providers. Matched by
/// substring containment against the sender domain; subject and body
/// are deliberately ignored so spam merely mentioning a trusted brand
/// is not let through.
pub const KNOWN_SERVICE_DOMAINS: &[&str] = &[
    "amazonpay.in",
    "paytm.com",
    "phonepe.com",
    "googlepay.com",
    "paypal.com",
    "razorpay.com",
    "instamojo.com",
    "amazon.in",
    "amazon.com",
    "flipkart.com",
    "swiggy.com",
    "zomato.com",
    "uber.com",
    "ola.com",
    "irctc.co.in",
    "makemytrip.com",
    "goibibo.com",
    "netflix.com",
    "spotify.com",
    "hotstar.com",
    "google.com",
    "microsoft.com",
    "apple.com",
];

/// Strong spam indicator phrases.
pub const SPAM_KEYWORDS: &[&str] = &[
    "winner",
    "won",
    "lottery",
    "prize",
    "claim now",
    "urgent act",
    "limited time",
    "click here now",
    "congratulations!!!",
    "free money",
    "million dollars",
    "bitcoin",
    "cryptocurrency",
    "act now",
    "expire soon",
    "verify your account immediately",
    "suspended account",
    "confirm identity",
    "wire transfer",
];

/// Minimum number of distinct keyword hits before the heuristic fires.
/// A single strong indicator is not enough; this is a deliberate
/// precision/recall trade-off.
pub const SPAM_KEYWORD_MIN_HITS: usize = 2;

/// Extract the lowercased domain after the last `@`, if any.
pub fn sender_domain(sender: &str) -> Option<String> {
    sender
        .rsplit_once('@')
        .map(|(_, domain)| domain.to_lowercase())
}

/// Operator-supplied whitelist of trusted sender domains.
#[derive(Debug, Clone, Default)]
pub struct TrustedDomains {
    domains: HashSet<String>,
}

impl TrustedDomains {
    pub fn new<I>(domains: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.as_ref().trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    /// Load the whitelist from a one-domain-per-line file (first CSV
    /// column; blank lines and `#` comments ignored). A missing file is
    /// a configuration gap, not an error: classification degrades to
    /// "no whitelist".
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => {
                let list = Self::new(
                    content
                        .lines()
                        .map(|line| line.split(',').next().unwrap_or(""))
                        .filter(|d| !d.trim_start().starts_with('#')),
                );
                info!(
                    path = %path.as_ref().display(),
                    domains = list.len(),
                    "loaded trusted domains"
                );
                list
            }
            Err(e) => {
                warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "trusted domains file not found, whitelist disabled"
                );
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Exact-match check of the sender's domain against the whitelist.
    /// An empty whitelist never matches: absence of data must fail open
    /// to the downstream layers, never whitelist everything.
    pub fn contains_sender(&self, sender: &str) -> bool {
        if self.domains.is_empty() {
            return false;
        }
        match sender_domain(sender) {
            Some(domain) => self.domains.contains(&domain),
            None => false,
        }
    }
}

/// Does the sender's domain contain any known-service domain as a
/// substring?
pub fn is_known_service(sender: &str) -> bool {
    match sender_domain(sender) {
        Some(domain) => KNOWN_SERVICE_DOMAINS
            .iter()
            .any(|service| domain.contains(service)),
        None => false,
    }
}

/// Does `subject + body` contain at least [`SPAM_KEYWORD_MIN_HITS`]
/// distinct spam keywords? Each keyword counts at most once regardless
/// of repetition.
pub fn has_spam_indicators(subject: &str, body: &str) -> bool {
    let text = format!("{} {}", subject, body).to_lowercase();
    let hits = SPAM_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count();
    hits >= SPAM_KEYWORD_MIN_HITS
}
