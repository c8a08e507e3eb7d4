use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod crawler;
mod driver;
mod models;
mod sink;

use config::{load_config, Config};
use driver::Driver;
use sink::RecordSink;

#[tokio::main]
async fn main() -> models::Result<()> {
    dotenv::dotenv().ok();

    let (config, config_error) = match load_config("config.yml").await {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("contact_finder={}", config.logging.level))
        }))
        .init();

    if let Some(e) = config_error {
        warn!("Failed to load config.yml: {}. Using defaults.", e);
    }

    info!("Starting search for e-commerce companies and contacts");

    let sink = RecordSink::new(Path::new(&config.output.directory))?;
    info!("Writing records to {}", sink.path().display());

    let driver = Driver::new(config, sink)?;
    let produced = driver.run().await?;

    info!("🏁 Successfully found {} companies with contact information", produced);

    Ok(())
}
