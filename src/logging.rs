//! Logging configuration for the command-line tool.
//!
//! Logs go to stderr so stdout only carries the rendered phrase.
//! Log level can be controlled via the `RUST_LOG` environment variable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// The log level defaults to `warn` but can be overridden with `RUST_LOG`.
/// Returns `Err` if a global subscriber was already installed.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()?;

    tracing::debug!("Logging initialized");

    Ok(())
}
