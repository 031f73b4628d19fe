//! Window with one or more bound webviews.

use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use webview_logger::{CaptureAdapter, StatusSubscriber, UiEvent};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};
use wry::{WebView, WebViewBuilder};

use crate::pages::status_page;

const WINDOW_WIDTH: f64 = 1280.0;
const WINDOW_HEIGHT: f64 = 800.0;

/// Logs every status it receives.
#[derive(Default)]
pub struct StatusLog {
    received: AtomicUsize,
}

impl StatusSubscriber for StatusLog {
    fn did_capture_status_value(&self, value: &str) {
        let count = self.received.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(status = %value, count, "Status received");
    }
}

pub struct DemoApp {
    adapter: CaptureAdapter,
    status_log: Arc<StatusLog>,
    url: Option<String>,
    pages: u16,
    window: Option<Window>,
    webviews: Vec<Rc<WebView>>,
}

impl DemoApp {
    pub fn new(adapter: CaptureAdapter, url: Option<String>, pages: u16) -> Self {
        let status_log = Arc::new(StatusLog::default());
        adapter.subscribe(&status_log);
        Self {
            adapter,
            status_log,
            url,
            pages,
            window: None,
            webviews: Vec::new(),
        }
    }

    pub fn received(&self) -> usize {
        self.status_log.received.load(Ordering::Relaxed)
    }

    fn create_webviews(&mut self, window: &Window) {
        let count = if self.url.is_some() { 1 } else { self.pages };
        let width = WINDOW_WIDTH / f64::from(count);

        for index in 0..count {
            let bounds = wry::Rect {
                position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(
                    width * f64::from(index),
                    0.0,
                )),
                size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, WINDOW_HEIGHT)),
            };
            let builder = WebViewBuilder::new().with_bounds(bounds);
            let builder = match &self.url {
                Some(url) => builder.with_url(url),
                None => builder.with_html(status_page(self.adapter.channel(), index + 1)),
            };

            match self.adapter.bind(builder, |b| b.build_as_child(window)) {
                Ok(webview) => self.webviews.push(webview),
                Err(e) => tracing::error!(index, "Failed to create webview: {e}"),
            }
        }
        tracing::info!(count = self.webviews.len(), "Webviews bound");
    }
}

impl ApplicationHandler<UiEvent> for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("webview-logger")
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        self.create_webviews(&window);
        self.window = Some(window);
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UiEvent) {
        event.run();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::CloseRequested = event {
            tracing::info!("Window close requested");
            self.webviews.clear();
            self.adapter.unsubscribe();
            event_loop.exit();
        }
    }
}
