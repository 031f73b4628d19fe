pub mod errors;
pub mod events;

pub use errors::{CaptureError, ConfigError, DispatchError, LoggerError, ScriptError};
pub use events::{CaptureEvent, CaptureSource};

pub type Result<T> = std::result::Result<T, LoggerError>;
