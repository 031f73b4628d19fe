//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod capture;
mod logging;
mod worker;

pub use capture::*;
pub use logging::*;
pub use worker::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggerConfig {
    pub capture: CaptureSection,
    pub logging: LoggingSection,
    pub worker: WorkerSection,
}
