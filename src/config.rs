//! Configuration loading
//!
//! Reads `~/.config/guardsearch/config.toml`. A missing file means defaults;
//! a file that fails to parse is a startup error.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{ApiConfig, Config, NotificationConfig, SearchConfig};

use crate::error::GuardSearchError;

const CONFIG_DIR: &str = "guardsearch";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> Result<Config, GuardSearchError> {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, GuardSearchError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    let config = parse_config_toml(&contents).map_err(|message| GuardSearchError::Config {
        path: path.to_path_buf(),
        message,
    })?;
    validate_api_url(&config.api.base_url)?;
    Ok(config)
}

pub fn parse_config_toml(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}

/// Reject base URLs reqwest cannot use
pub fn validate_api_url(url: &str) -> Result<(), GuardSearchError> {
    let trimmed = url.trim();
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(rest) if !rest.is_empty() => Ok(()),
        _ => Err(GuardSearchError::InvalidApiUrl(url.to_string())),
    }
}
