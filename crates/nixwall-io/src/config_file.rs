use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use nixwall_core::config::{ConfigError, GeneratorConfig};

#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}

/// Parse and validate a JSON config. Missing keys fall back to the defaults.
pub fn parse_config(json: &str) -> Result<GeneratorConfig, ConfigFileError> {
    let config: GeneratorConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigFileError> {
    let json = fs::read_to_string(path)?;
    let config = parse_config(&json)?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}
