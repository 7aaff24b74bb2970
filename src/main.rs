use anyhow::Result;
use fitgirl::api::create_routes;
use fitgirl::config::{AppConfig, CosmicConfig};
use fitgirl::services::{ContentService, CosmicClient};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let cosmic_config = CosmicConfig::from_env()?;
    config.check_cosmic(&cosmic_config)?;
    if !cosmic_config.has_write_key() {
        tracing::warn!("COSMIC_WRITE_KEY is not set, progress entries cannot be saved");
    }
    info!(
        "Reading content from bucket '{}' via {}",
        cosmic_config.bucket_slug, cosmic_config.api_url
    );

    let content = ContentService::new(CosmicClient::new(cosmic_config)?);
    let app = create_routes(content);

    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("FitGirl server starting on http://{} ({})", address, config.environment);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
