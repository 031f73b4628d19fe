//! Configuration for the webview capture adapter.
//!
//! TOML-based, with defaults for every key so partial files work. The
//! library crates take a [`LoggerConfig`] value; only binaries read files.
//!
//! ```rust,no_run
//! use webview_logger_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("listening on channel {}", config.capture.channel);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{CaptureSection, LoggerConfig, LoggingSection, WorkerSection};
pub use schema::{DEFAULT_CAPTURE_SCRIPT, DEFAULT_CHANNEL, DEFAULT_WORKER_THREAD_NAME};

use std::path::Path;

use webview_logger_common::ConfigError;

/// Load config from `path`, or from the platform default location when `None`.
///
/// A missing default file is not an error: defaults are returned. A missing
/// explicit file is.
pub fn load_config(path: Option<&Path>) -> Result<LoggerConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &LoggerConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&LoggerConfig::default());
        assert!(json.contains("\"capture\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"worker\""));
        assert!(json.contains("\"logger\""));
    }

    #[test]
    fn load_config_rejects_invalid_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[capture]\nchannel = \"\"\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlog_html = false\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(!config.logging.log_html);
        assert_eq!(config.capture.channel, DEFAULT_CHANNEL);
    }
}
