mod app;
mod cli;
mod pages;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use webview_logger::{CaptureAdapter, UiEvent};
use winit::event_loop::EventLoop;

fn main() {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("webview_logger=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "webview_logger=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("webview-logger v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = webview_logger_config::load_config(args.config.as_deref().map(Path::new))
        .unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            webview_logger_config::LoggerConfig::default()
        });
    tracing::info!(channel = %config.capture.channel, "Config loaded");
    tracing::debug!("Effective config: {}", webview_logger_config::config_to_json(&config));

    let event_loop = match EventLoop::<UiEvent>::with_user_event().build() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };

    let adapter = match CaptureAdapter::builder(event_loop.create_proxy())
        .config(config)
        .build()
    {
        Ok(adapter) => adapter,
        Err(e) => {
            tracing::error!("Failed to start capture adapter: {e}");
            std::process::exit(1);
        }
    };

    let mut app = app::DemoApp::new(adapter, args.url, args.pages);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!(received = app.received(), "Shutdown complete");
}
