//! Logging system initialization
//!
//! Sets up the tracing subscriber from the loaded configuration. Must be
//! called only once, after configuration has been loaded.

use crate::config::Config;

/// Initialize the logging system.
///
/// Returns a `WorkerGuard` that must be kept alive for the duration of the
/// program so non-blocking log writes are flushed on shutdown.
///
/// # Panics
/// * If opening the configured log file fails
/// * If the global subscriber is already set
pub fn init_logging(config: &Config) -> tracing_appender::non_blocking::WorkerGuard {
    let to_console = config
        .logging
        .file
        .as_ref()
        .is_none_or(|f| f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = if to_console {
        Box::new(std::io::stdout())
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.logging.file.as_deref().unwrap_or_default())
            .expect("Failed to open log file");
        Box::new(file)
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.log_filter());

    tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(to_console)
        .init();

    guard
}
