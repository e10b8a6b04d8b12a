//! # Tracing Setup
//!
//! Installs the global tracing subscriber. Called once from `main`; tests set
//! up their own subscriber.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

use crate::config::{LogConfig, LogFormat};

/// Installs a subscriber filtered by `RUST_LOG` if set, otherwise by the
/// configured level.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init_tracing(config: &LogConfig) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                env!("CARGO_PKG_NAME").to_string(),
                std::io::stdout,
            ))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .try_init(),
    }
}
