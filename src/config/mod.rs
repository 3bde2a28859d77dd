mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Config file to read: `CONFIG_PATH` when set, else `config.yaml` if it exists.
pub fn resolve_path() -> Option<String> {
    env::var("CONFIG_PATH").ok().or_else(|| {
        Path::new(DEFAULT_CONFIG_PATH)
            .exists()
            .then(|| DEFAULT_CONFIG_PATH.to_string())
    })
}

/// Loads the configuration from [`resolve_path`], or defaults when there is no file.
///
/// An explicit `CONFIG_PATH` must exist.
pub async fn load() -> Result<Config> {
    let mut config = match resolve_path() {
        Some(path) => load_from(&path).await?,
        None => {
            debug!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
            Config::default()
        }
    };

    if config.text_model.api_key.is_none() {
        config.text_model.api_key = env::var("HF_API_TOKEN").ok();
    }

    Ok(config)
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.server.body_limit_bytes == 0 {
        return Err(Error::config("server.body_limit_bytes must be greater than zero"));
    }
    if config.text_model.model.trim().is_empty() {
        return Err(Error::config("text_model.model must not be empty"));
    }
    for (key, url) in [
        ("text_model.base_url", &config.text_model.base_url),
        ("face_model.base_url", &config.face_model.base_url),
    ] {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(Error::config(format!("{} must be an http(s) URL, got '{}'", key, url)));
        }
    }
    Ok(())
}
