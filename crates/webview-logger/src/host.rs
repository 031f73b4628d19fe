//! The webview as seen by the adapter: something that can evaluate a script
//! and report its result asynchronously.

use webview_logger_common::ScriptError;

pub type ScriptResult = Result<serde_json::Value, ScriptError>;

/// Invoked once with the decoded script result. May run on any thread.
pub type ScriptCallback = Box<dyn FnOnce(ScriptResult) + Send + 'static>;

pub trait ScriptHost {
    /// Evaluate `script` in the current page and report its result.
    ///
    /// Implementations call `callback` exactly once, including on failure.
    fn evaluate_script(&self, script: &str, callback: ScriptCallback);
}

#[cfg(feature = "wry")]
mod wry_host {
    use std::sync::{Arc, Mutex};

    use webview_logger_common::ScriptError;

    use super::{ScriptCallback, ScriptHost};

    impl ScriptHost for wry::WebView {
        fn evaluate_script(&self, script: &str, callback: ScriptCallback) {
            // wry takes an `Fn`; the slot makes sure ours only fires once.
            let slot = Arc::new(Mutex::new(Some(callback)));
            let on_result = Arc::clone(&slot);

            let outcome = self.evaluate_script_with_callback(script, move |raw: String| {
                if let Some(callback) = take(&on_result) {
                    // wry hands back the result JSON-encoded.
                    callback(serde_json::from_str(&raw).map_err(ScriptError::MalformedResult));
                }
            });

            if let Err(e) = outcome {
                if let Some(callback) = take(&slot) {
                    callback(Err(ScriptError::Evaluation(e.to_string())));
                }
            }
        }
    }

    fn take(slot: &Mutex<Option<ScriptCallback>>) -> Option<ScriptCallback> {
        slot.lock().ok().and_then(|mut callback| callback.take())
    }
}
