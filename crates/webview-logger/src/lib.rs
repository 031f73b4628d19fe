//! Status capture for embedded webviews.
//!
//! Attaches to a webview and:
//! - reads the rendered document whenever a page finishes loading
//! - listens for messages page script posts on a named channel (`logger`)
//! - decodes each payload as a JSON object and forwards its `status` field
//!   to one subscriber, on the UI thread
//!
//! Payloads are processed in order on a dedicated worker thread so the
//! webview's own thread never waits on parsing or logging.

pub mod adapter;
pub mod dispatch;
pub mod host;
pub mod ipc;
pub mod serial;
pub mod status;
pub mod subscriber;

pub use adapter::{CaptureAdapter, CaptureAdapterBuilder};
pub use dispatch::{ui_queue, UiDispatcher, UiQueue, UiQueueSender, UiTask};
pub use host::{ScriptCallback, ScriptHost, ScriptResult};
pub use ipc::MessageEnvelope;
pub use serial::SerialQueue;
pub use status::{extract_status, extract_status_from_bytes};
pub use subscriber::StatusSubscriber;

#[cfg(feature = "winit")]
pub use dispatch::UiEvent;

pub use webview_logger_common::{CaptureError, CaptureEvent, CaptureSource, LoggerError};
pub use webview_logger_config::LoggerConfig;
