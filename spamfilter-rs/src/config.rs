use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub whitelist: WhitelistConfig,
    pub filter: FilterConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    pub classifier_path: String,
    pub vectorizer_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhitelistConfig {
    pub trusted_domains_path: String,
}

/// Decision-pipeline tuning.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Model-layer spam threshold: an email is labeled spam when
    /// `p_spam >= spam_threshold`. 0.5 is the balanced default for the
    /// Multinomial Naive Bayes model; 0.75 is the stricter variant used
    /// when false positives are more costly than missed spam.
    pub spam_threshold: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::FilterError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::FilterError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "127.0.0.1:8000".to_string(),
            },
            model: ModelConfig {
                classifier_path: "model/spam_model.json".to_string(),
                vectorizer_path: "model/vectorizer.json".to_string(),
            },
            whitelist: WhitelistConfig {
                trusted_domains_path: "data/trusted_domains.csv".to_string(),
            },
            filter: FilterConfig {
                spam_threshold: 0.5,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            spam_threshold: 0.5,
        }
    }
}
