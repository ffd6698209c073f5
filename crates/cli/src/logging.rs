//! Tracing setup
//!
//! Logs go to stderr; stdout carries only the rendered trace.

use support_triage_config::{LogFormat, LoggingSettings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// Filter precedence: `-v`/`-q` override, then RUST_LOG, then config.
pub fn init_logging(settings: &LoggingSettings, cli_override: Option<&str>) {
    let filter = match cli_override {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&settings.level)),
    };

    let registry = tracing_subscriber::registry().with(filter);

    match settings.format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
