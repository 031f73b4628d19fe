use serde::{Deserialize, Serialize};

/// Which webview callback produced a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureSource {
    /// The rendered document, read after a page finished loading.
    Navigation,
    /// A message posted by page script on the logger channel.
    Message,
}

/// What happened to a single payload. Emitted once per capture attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CaptureEvent {
    StatusCaptured {
        source: CaptureSource,
        status: String,
    },
    PayloadRejected {
        source: CaptureSource,
        reason: String,
    },
    ScriptFailed {
        reason: String,
    },
    MessageDropped {
        channel: String,
        reason: String,
    },
}

impl CaptureEvent {
    /// The captured status, if this event carries one.
    pub fn status(&self) -> Option<&str> {
        match self {
            Self::StatusCaptured { status, .. } => Some(status),
            _ => None,
        }
    }
}
