use serde::{Deserialize, Serialize};

pub const DEFAULT_WORKER_THREAD_NAME: &str = "webview-logger-serial";

/// Settings for the serial processing thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerSection {
    pub thread_name: String,
}

impl Default for WorkerSection {
    fn default() -> Self {
        Self {
            thread_name: DEFAULT_WORKER_THREAD_NAME.to_string(),
        }
    }
}
