use spamfilter_rs::api::ApiServer;
use spamfilter_rs::config::Config;
use spamfilter_rs::filter::{SpamFilter, TrustedDomains};
use spamfilter_rs::model::ModelBundle;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        Config::default()
    };

    // Initialize logging (RUST_LOG wins over the configured level)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting spamfilter-rs");
    info!("  Listening on: {}", config.server.listen_addr);
    info!("  Spam threshold: {}", config.filter.spam_threshold);
    info!("  Model path: {}", config.model.classifier_path);

    // Load resources once; requests share them read-only.
    let trusted = TrustedDomains::load(&config.whitelist.trusted_domains_path);
    let model = ModelBundle::load(&config.model)?;
    if model.is_none() {
        warn!("serving without a model: /predict will fail until artifacts exist");
    }

    let spam_filter = SpamFilter::new(config.filter.clone(), trusted, model);

    let server = ApiServer::new(spam_filter, config.server.listen_addr.clone());
    server.run().await?;

    Ok(())
}
