use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize tracing for an embedding application.
///
/// `RUST_LOG` takes precedence over the configured filter. Output goes to
/// stderr unless `config.file` is set; a log file that cannot be created
/// falls back to stderr with a warning.
///
/// Installs the global subscriber, so call it once per process.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = config.file.as_ref().and_then(|path| {
        std::fs::File::create(path)
            .map_err(|e| eprintln!("Warning: Failed to create log file {}: {}", path.display(), e))
            .ok()
    });

    let Some(file) = file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .init();
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
