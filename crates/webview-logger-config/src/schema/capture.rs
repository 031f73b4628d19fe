//! What the adapter listens to and what it evaluates.

use serde::{Deserialize, Serialize};

/// Message channel page script posts to.
pub const DEFAULT_CHANNEL: &str = "logger";

/// Script evaluated after every finished navigation.
pub const DEFAULT_CAPTURE_SCRIPT: &str = "document.documentElement.outerHTML.toString()";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureSection {
    pub channel: String,
    pub script: String,
}

impl Default for CaptureSection {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_string(),
            script: DEFAULT_CAPTURE_SCRIPT.to_string(),
        }
    }
}
