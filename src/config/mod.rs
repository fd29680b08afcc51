mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let mut config = load_from(&config_path).await?;

    if config.llm.api_key.is_empty() {
        if let Ok(key) = env::var("OPENAI_API_KEY") {
            config.llm.api_key = key;
        }
    }

    Ok(config)
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;

    if config.llm.model.trim().is_empty() {
        return Err(Error::config("llm.model must not be empty"));
    }

    Ok(config)
}
