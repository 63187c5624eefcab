//! Optional per-user configuration (`config.toml` in the store directory).

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use super::prompt::{Audience, GptModel};

#[derive(Deserialize, Debug, Default)]
struct FileConfig {
    model: Option<String>,
    audience: Option<String>,
    length: Option<u32>,
    timeout: Option<u64>,
    base_url: Option<String>,
}

/// Resolved configuration with defaults applied.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Default chat model for `generate`.
    pub model: GptModel,
    /// Default target audience.
    pub audience: Audience,
    /// Default sermon length in minutes.
    pub length: u32,
    /// Client-side timeout for the completion call, in seconds.
    pub timeout: u64,
    /// Endpoint override for the completion API.
    pub base_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: GptModel::Gpt41Mini,
            audience: Audience::Congregation,
            length: 10,
            timeout: 120,
            base_url: None,
        }
    }
}

/// Load `config.toml` from the store directory. A missing file yields the
/// defaults; a malformed one is an error rather than a silent fallback.
pub fn load_config(base_dir: &Path) -> Result<AppConfig, String> {
    let path = base_dir.join("config.toml");
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let raw =
        fs::read_to_string(&path).map_err(|e| format!("Failed to read config.toml: {}", e))?;
    let file: FileConfig =
        toml::from_str(&raw).map_err(|e| format!("Failed to parse config.toml: {}", e))?;

    let mut config = AppConfig::default();
    if let Some(model) = file.model {
        config.model = GptModel::from_str(&model, true)
            .map_err(|_| format!("Unknown model '{}' in config.toml", model))?;
    }
    if let Some(audience) = file.audience {
        config.audience = Audience::parse(&audience)
            .ok_or_else(|| format!("Unknown audience '{}' in config.toml", audience))?;
    }
    if let Some(length) = file.length {
        config.length = length;
    }
    if let Some(timeout) = file.timeout {
        config.timeout = timeout;
    }
    config.base_url = file.base_url;
    Ok(config)
}
