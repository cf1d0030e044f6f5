//! CLI tool for classifying a single email without the HTTP server
//!
//! Useful for sanity-checking the rule layers and a freshly trained
//! model from the command line.
//!
//! # Usage
//!
//! ```bash
//! spam-check --sender offers@randomsite.biz \
//!     --subject "WINNER!!" \
//!     --body "You have won a million dollars, claim now!"
//! ```

use clap::Parser;
use spamfilter_rs::config::Config;
use spamfilter_rs::filter::{Email, SpamFilter, TrustedDomains};
use spamfilter_rs::model::ModelBundle;

#[derive(Parser)]
#[command(name = "spam-check")]
#[command(about = "Classify a single email from the command line", long_about = None)]
struct Cli {
    /// Configuration file (defaults are used when absent)
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Sender address
    #[arg(long, default_value = "")]
    sender: String,

    /// Subject line
    #[arg(long, default_value = "")]
    subject: String,

    /// Message body
    #[arg(long, default_value = "")]
    body: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = if std::path::Path::new(&cli.config).exists() {
        Config::from_file(&cli.config)?
    } else {
        Config::default()
    };

    let trusted = TrustedDomains::load(&config.whitelist.trusted_domains_path);
    let model = ModelBundle::load(&config.model)?;
    let filter = SpamFilter::new(config.filter, trusted, model);

    let email = Email {
        sender: cli.sender,
        subject: cli.subject,
        body: cli.body,
    };

    match filter.classify(&email) {
        Ok(verdict) => {
            println!("Label:      {:?}", verdict.label);
            println!("Confidence: {:.2}", verdict.confidence);
            println!("Reason:     {}", verdict.reason);
            if let Some(analysis) = verdict.analysis {
                println!("Analysis:   {}", analysis);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Classification failed: {}", e);
            std::process::exit(1);
        }
    }
}
