//! TOML config file loading.

use std::path::{Path, PathBuf};

use tracing::info;
use webview_logger_common::ConfigError;

use crate::schema::LoggerConfig;

/// Load config from a specific TOML file path.
///
/// Missing keys take their defaults. The result is not validated here.
pub fn load_from_path(path: &Path) -> Result<LoggerConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config = from_toml_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse config from TOML text.
pub fn from_toml_str(content: &str) -> Result<LoggerConfig, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from the platform-specific default path, or defaults if
/// no file exists there.
pub fn load_default() -> Result<LoggerConfig, ConfigError> {
    let path = default_config_path()?;
    if !path.exists() {
        info!("no config found at {}, using defaults", path.display());
        return Ok(LoggerConfig::default());
    }
    load_from_path(&path)
}

/// Get the platform-specific default config file path.
///
/// On macOS: `~/Library/Application Support/webview-logger/config.toml`
/// On Linux: `~/.config/webview-logger/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::ParseError("could not determine config directory".into())
    })?;
    Ok(config_dir.join("webview-logger").join("config.toml"))
}
