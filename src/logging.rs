//! Structured logging setup

use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Install the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` wins when set; otherwise warnings only, or everything at
/// debug level with `debug`. Text output is colored only when `ansi` is set.
/// Calling this twice is harmless.
pub fn init(format: LogFormat, debug: bool, ansi: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}
