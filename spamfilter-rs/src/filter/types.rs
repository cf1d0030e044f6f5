//! Filter types and data structures

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Incoming email to classify.
///
/// Absent or non-string fields deserialize to empty strings so that a
/// sloppy client payload still reaches a verdict instead of failing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Email {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub sender: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub subject: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub body: String,
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    })
}

/// Final classification label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerdictLabel {
    /// Sender domain exactly matches the trusted-domain whitelist
    #[serde(rename = "whitelisted")]
    Whitelisted,
    /// Legitimate email (rule layer or model)
    #[serde(rename = "Not Spam")]
    NotSpam,
    /// Spam (rule layer or model)
    #[serde(rename = "Spam")]
    Spam,
}

/// Classification result for one email.
///
/// `confidence` carries the unrounded probability; presentation rounding
/// happens at the API boundary.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub label: VerdictLabel,
    pub confidence: f64,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

impl Verdict {
    /// Whitelist layer fired.
    pub fn whitelisted() -> Self {
        Self {
            label: VerdictLabel::Whitelisted,
            confidence: 1.0,
            reason: "Sender is in the whitelist".to_string(),
            analysis: None,
        }
    }

    /// Known-service layer fired.
    pub fn known_service() -> Self {
        Self {
            label: VerdictLabel::NotSpam,
            confidence: 0.95,
            reason: "Recognized as legitimate financial or transactional email".to_string(),
            analysis: None,
        }
    }

    /// Spam-keyword layer fired.
    pub fn keyword_spam() -> Self {
        Self {
            label: VerdictLabel::Spam,
            confidence: 0.95,
            reason: "Contains multiple spam indicators".to_string(),
            analysis: None,
        }
    }

    /// Model layer decided spam with probability `p_spam`.
    pub fn model_spam(p_spam: f64) -> Self {
        Self {
            label: VerdictLabel::Spam,
            confidence: p_spam,
            reason: "Contains suspicious keywords and patterns".to_string(),
            analysis: Some(format!(
                "AI Analysis: High probability of spam ({:.1}%). \
                 Detected suspicious patterns typical of unsolicited emails.",
                p_spam * 100.0
            )),
        }
    }

    /// Model layer decided ham with probability `p_ham`.
    pub fn model_ham(p_ham: f64) -> Self {
        Self {
            label: VerdictLabel::NotSpam,
            confidence: p_ham,
            reason: "Appears to be legitimate".to_string(),
            analysis: Some(format!(
                "AI Analysis: Appears legitimate ({:.1}%). \
                 Content aligns with normal communication patterns.",
                p_ham * 100.0
            )),
        }
    }
}
