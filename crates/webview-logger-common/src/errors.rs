use std::path::PathBuf;

/// Why a captured payload produced no status value.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("payload is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("payload is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("payload decoded to {0}, expected a JSON object")]
    NotAnObject(&'static str),

    #[error("status key not found in payload")]
    MissingStatus,
}

/// Failure reported by the webview while evaluating a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("script evaluation failed: {0}")]
    Evaluation(String),

    #[error("script result is not valid JSON: {0}")]
    MalformedResult(#[source] serde_json::Error),
}

/// The UI context refused a task, usually because its event loop has exited.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("ui context closed")]
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),
}
