//! Binding the adapter to a `wry` webview.

use std::cell::OnceCell;
use std::rc::{Rc, Weak};

use tracing::debug;
use webview_logger_common::{LoggerError, Result};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use crate::ipc::channel_shim_script;

use super::CaptureAdapter;

impl CaptureAdapter {
    /// Install the adapter on a webview under construction.
    ///
    /// Adds the channel shim, an IPC handler for channel messages and a
    /// page-load handler that captures the document once loading finishes.
    /// `build` turns the prepared builder into the webview, for example
    /// `|b| b.build(&window)` or `|b| b.build_as_child(&window)`.
    ///
    /// A build failure comes back as [`LoggerError::WebView`].
    pub fn bind<'a, F>(&self, builder: WebViewBuilder<'a>, build: F) -> Result<Rc<WebView>>
    where
        F: FnOnce(WebViewBuilder<'a>) -> std::result::Result<WebView, wry::Error>,
    {
        // Handlers are installed before the webview exists; the page-load
        // handler finds it through this cell once `build` returns.
        let target: Rc<OnceCell<Weak<WebView>>> = Rc::new(OnceCell::new());

        let builder = builder.with_initialization_script(&channel_shim_script(self.channel()));
        let builder = self.attach_ipc_handler(builder);
        let builder = self.attach_page_load_handler(builder, Rc::clone(&target));

        let webview = build(builder).map_err(|e| LoggerError::WebView(e.to_string()))?;
        let webview = Rc::new(webview);
        let _ = target.set(Rc::downgrade(&webview));

        debug!(channel = %self.channel(), "webview bound");
        Ok(webview)
    }

    fn attach_ipc_handler<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let adapter = self.clone();
        builder.with_ipc_handler(move |request| {
            adapter.on_ipc_message(request.body());
        })
    }

    fn attach_page_load_handler<'a>(
        &self,
        builder: WebViewBuilder<'a>,
        target: Rc<OnceCell<Weak<WebView>>>,
    ) -> WebViewBuilder<'a> {
        let adapter = self.clone();
        builder.with_on_page_load_handler(move |event, url| {
            if !matches!(event, PageLoadEvent::Finished) {
                return;
            }
            match target.get().and_then(Weak::upgrade) {
                Some(webview) => {
                    debug!(url = %url, "page finished, capturing document");
                    adapter.on_navigation_finished(&*webview);
                }
                None => debug!(url = %url, "page finished before webview was bound"),
            }
        })
    }
}
