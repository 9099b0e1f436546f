use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `ohmybar_providers=debug`
pub const LOG_ENV: &str = "OHMYBAR_LOG";

/// Log to stderr; stdout carries the menu.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
