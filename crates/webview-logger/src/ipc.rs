//! Message channel between page script and the adapter.
//!
//! wry exposes a single unnamed IPC pipe (`window.ipc.postMessage`). To give
//! page script a named channel, an initialization script installs
//! `window.<channel>.postMessage(body)` (and the WebKit-style
//! `window.webkit.messageHandlers.<channel>.postMessage(body)` where the page
//! can write it), which wraps every post in a [`MessageEnvelope`].

use serde::Deserialize;

/// A message posted on a named channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageEnvelope {
    pub channel: String,
    /// Whatever page script passed to `postMessage`. Missing means `null`.
    #[serde(default)]
    pub body: serde_json::Value,
}

impl MessageEnvelope {
    /// Parse an envelope from the raw IPC string.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Generate the initialization script that exposes `channel` to page script.
pub fn channel_shim_script(channel: &str) -> String {
    let channel_json =
        serde_json::to_string(channel).unwrap_or_else(|_| "\"logger\"".to_string());
    format!(
        r#"
(function() {{
    var channel = {channel_json};
    var handler = {{
        postMessage: function(body) {{
            window.ipc.postMessage(JSON.stringify({{ channel: channel, body: body }}));
        }}
    }};
    window[channel] = handler;
    window.webkit = window.webkit || {{}};
    window.webkit.messageHandlers = window.webkit.messageHandlers || {{}};
    if (!window.webkit.messageHandlers[channel]) {{
        try {{
            window.webkit.messageHandlers[channel] = handler;
        }} catch (e) {{}}
    }}
}})();
"#
    )
}
