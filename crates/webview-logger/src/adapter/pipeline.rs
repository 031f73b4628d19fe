//! Worker-side processing: logging, status extraction and delivery.
//!
//! Everything here runs on the serial queue.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::{debug, info, warn};
use webview_logger_common::{CaptureError, CaptureEvent, CaptureSource, ScriptError};
use webview_logger_config::LoggerConfig;

use crate::dispatch::UiDispatcher;
use crate::ipc::MessageEnvelope;
use crate::status::{extract_status, extract_status_from_bytes};
use crate::subscriber::SubscriberSlot;

pub(super) struct Pipeline {
    pub(super) config: LoggerConfig,
    pub(super) dispatcher: Arc<dyn UiDispatcher>,
    pub(super) subscriber: Arc<SubscriberSlot>,
    pub(super) events: Option<Arc<Mutex<Vec<CaptureEvent>>>>,
}

impl Pipeline {
    pub(super) fn capture_text(&self, source: CaptureSource, text: &str) {
        self.finish(source, extract_status(text));
    }

    pub(super) fn capture_bytes(&self, source: CaptureSource, bytes: &[u8]) {
        self.finish(source, extract_status_from_bytes(bytes));
    }

    pub(super) fn log_document(&self, html: &str) {
        if !self.config.logging.log_html {
            return;
        }
        let preview = preview(html, self.config.logging.html_preview_chars);
        info!(len = html.len(), "webview HTML response: {preview}");
    }

    pub(super) fn script_failed(&self, error: &ScriptError) {
        warn!(error = %error, "error logging webview response");
        self.record(CaptureEvent::ScriptFailed {
            reason: error.to_string(),
        });
    }

    /// Route a channel message: only string bodies on the configured
    /// channel reach status extraction.
    pub(super) fn receive_message(&self, channel: &str, body: Value) {
        if channel != self.config.capture.channel {
            self.message_dropped(channel, "unknown channel");
            return;
        }
        match body {
            Value::String(text) => self.capture_text(CaptureSource::Message, &text),
            _ => self.message_dropped(channel, "body is not a string"),
        }
    }

    pub(super) fn receive_ipc(&self, raw: &str) {
        match MessageEnvelope::from_json(raw) {
            Ok(envelope) => self.receive_message(&envelope.channel, envelope.body),
            Err(e) => self.message_dropped("", &format!("not a channel envelope: {e}")),
        }
    }

    fn message_dropped(&self, channel: &str, reason: &str) {
        debug!(channel, reason, "message dropped");
        self.record(CaptureEvent::MessageDropped {
            channel: channel.to_string(),
            reason: reason.to_string(),
        });
    }

    fn finish(&self, source: CaptureSource, outcome: Result<String, CaptureError>) {
        match outcome {
            Ok(status) => {
                info!(?source, status = %status, "captured status value");
                let event = CaptureEvent::StatusCaptured {
                    source,
                    status: status.clone(),
                };
                // Dispatch before recording: once the event is visible the
                // delivery task is already queued on the UI side.
                self.deliver(status);
                self.record(event);
            }
            Err(e) => {
                warn!(?source, error = %e, "payload carries no status");
                self.record(CaptureEvent::PayloadRejected {
                    source,
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Hand `status` to the subscriber on the UI thread.
    fn deliver(&self, status: String) {
        let subscriber = Arc::clone(&self.subscriber);
        let dispatched = self.dispatcher.dispatch(Box::new(move || {
            if !subscriber.notify(&status) {
                debug!(status = %status, "no subscriber for captured status");
            }
        }));
        if let Err(e) = dispatched {
            warn!(error = %e, "could not deliver status to UI thread");
        }
    }

    fn record(&self, event: CaptureEvent) {
        if let Some(events) = &self.events {
            if let Ok(mut events) = events.lock() {
                events.push(event);
            }
        }
    }
}

/// First `limit` characters of `text`, or all of it when `limit` is 0.
fn preview(text: &str, limit: usize) -> &str {
    if limit == 0 {
        return text;
    }
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
