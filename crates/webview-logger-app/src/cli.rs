use clap::Parser;

/// Demo host for the webview status logger.
#[derive(Parser, Debug)]
#[command(name = "webview-logger", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. debug, webview_logger=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Load this URL instead of the built-in demo pages.
    #[arg(long)]
    pub url: Option<String>,

    /// Number of demo pages to load side by side.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=16))]
    pub pages: u16,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["webview-logger"]);
        assert_eq!(args.pages, 1);
        assert!(args.url.is_none());
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn all_flags() {
        let args = Args::parse_from([
            "webview-logger",
            "--config",
            "/tmp/config.toml",
            "--log-level",
            "debug",
            "--url",
            "https://example.com",
            "--pages",
            "5",
        ]);
        assert_eq!(args.config.as_deref(), Some("/tmp/config.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.url.as_deref(), Some("https://example.com"));
        assert_eq!(args.pages, 5);
    }

    #[test]
    fn pages_out_of_range_rejected() {
        assert!(Args::try_parse_from(["webview-logger", "--pages", "0"]).is_err());
        assert!(Args::try_parse_from(["webview-logger", "--pages", "17"]).is_err());
    }
}
