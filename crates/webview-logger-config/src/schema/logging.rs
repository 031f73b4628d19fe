//! Diagnostic output settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log the captured document after each finished navigation.
    pub log_html: bool,
    /// Truncate logged documents to this many characters. 0 logs everything.
    pub html_preview_chars: usize,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            log_html: true,
            html_preview_chars: 0,
        }
    }
}
