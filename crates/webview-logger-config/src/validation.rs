//! Configuration validation.
//!
//! Collects every problem into a single error so a user fixes the file once.

use crate::schema::LoggerConfig;
use webview_logger_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LoggerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    let channel = &config.capture.channel;
    if channel.is_empty() {
        errors.push("capture.channel must not be empty".into());
    } else if !is_script_identifier(channel) {
        errors.push(format!(
            "capture.channel '{channel}' must be a JavaScript identifier"
        ));
    }

    if config.capture.script.trim().is_empty() {
        errors.push("capture.script must not be empty".into());
    }

    let thread_name = &config.worker.thread_name;
    if thread_name.is_empty() {
        errors.push("worker.thread_name must not be empty".into());
    } else if thread_name.contains('\0') {
        errors.push("worker.thread_name must not contain NUL bytes".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// The channel name is spliced into the page shim as a property name.
fn is_script_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&LoggerConfig::default()).is_ok());
    }

    #[test]
    fn empty_channel_rejected() {
        let mut config = LoggerConfig::default();
        config.capture.channel.clear();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("capture.channel must not be empty"));
    }

    #[test]
    fn channel_must_be_identifier() {
        let mut config = LoggerConfig::default();
        for bad in ["1logger", "log-ger", "log ger", "lo\"g"] {
            config.capture.channel = bad.to_string();
            assert!(validate(&config).is_err(), "{bad} should be rejected");
        }
        for good in ["logger", "_status", "$bridge", "statusV2"] {
            config.capture.channel = good.to_string();
            assert!(validate(&config).is_ok(), "{good} should be accepted");
        }
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = LoggerConfig::default();
        config.capture.channel.clear();
        config.capture.script = "   ".into();
        config.worker.thread_name = "bad\0name".into();

        let msg = validate(&config).unwrap_err().to_string();
        assert!(msg.contains("capture.channel"));
        assert!(msg.contains("capture.script"));
        assert!(msg.contains("worker.thread_name"));
    }
}
