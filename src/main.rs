use anyhow::{Context, Result};
use emotion_api::{
    config::{self, Config},
    server,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs the JSON subscriber. `RUST_LOG` wins over `server.logs.level`;
/// either may be a bare level or full filter directives.
fn init_tracing(config: &Config) -> Result<String> {
    let directives =
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter '{}'", directives))?;

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    Ok(directives)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = config::resolve_path();
    let config = config::load()
        .await
        .context("Failed to load configuration")?;

    let filter = init_tracing(&config)?;

    info!(filter = %filter, "Starting Emotion Detection API");
    match config_path {
        Some(path) => info!("Configuration loaded from {}", path),
        None => info!("No configuration file found, using defaults"),
    }
    info!(
        text_model = %config.text_model.model,
        text_backend = %config.text_model.base_url,
        text_auth = config.text_model.api_key.is_some(),
        face_backend = %config.face_model.base_url,
        "Model backends configured"
    );

    server::run(config).await?;

    Ok(())
}
