//! Entry points called by the webview host.
//!
//! Each one does the minimum on the calling thread and queues the rest.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};
use webview_logger_common::CaptureSource;

use crate::host::{ScriptHost, ScriptResult};

use super::CaptureAdapter;

impl CaptureAdapter {
    /// A page finished loading: read its document and capture from it.
    pub fn on_navigation_finished<H>(&self, host: &H)
    where
        H: ScriptHost + ?Sized,
    {
        let adapter = self.clone();
        host.evaluate_script(
            &self.config().capture.script,
            Box::new(move |result: ScriptResult| {
                let pipeline = Arc::clone(&adapter.inner.pipeline);
                match result {
                    Ok(Value::String(html)) => adapter.submit(move || {
                        pipeline.log_document(&html);
                        pipeline.capture_text(CaptureSource::Navigation, &html);
                    }),
                    Ok(other) => {
                        debug!(result = %other, "document script returned a non-string");
                    }
                    Err(error) => adapter.submit(move || pipeline.script_failed(&error)),
                }
            }),
        );
    }

    /// Page script posted `body` on channel `name`.
    ///
    /// Only string bodies on the configured channel are processed.
    pub fn on_message_received(&self, name: &str, body: &Value) {
        let pipeline = Arc::clone(&self.inner.pipeline);
        let name = name.to_string();
        let body = body.clone();
        self.submit(move || pipeline.receive_message(&name, body));
    }

    /// Raw IPC string from the page shim, a [`MessageEnvelope`](crate::ipc::MessageEnvelope).
    ///
    /// The envelope is decoded on the worker, not the calling thread.
    pub fn on_ipc_message(&self, raw: &str) {
        let pipeline = Arc::clone(&self.inner.pipeline);
        let raw = raw.to_string();
        self.submit(move || pipeline.receive_ipc(&raw));
    }

    /// Capture from a raw byte payload, for hosts that do not decode text.
    pub fn process_bytes(&self, source: CaptureSource, bytes: Vec<u8>) {
        let pipeline = Arc::clone(&self.inner.pipeline);
        self.submit(move || pipeline.capture_bytes(source, &bytes));
    }

    /// Capture from a text payload.
    pub fn process_text(&self, source: CaptureSource, text: impl Into<String>) {
        let pipeline = Arc::clone(&self.inner.pipeline);
        let text = text.into();
        self.submit(move || pipeline.capture_text(source, &text));
    }

    fn submit<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if !self.inner.queue.submit(job) {
            warn!(queue = %self.inner.queue.name(), "serial queue closed, payload dropped");
        }
    }
}
