//! `tracing` subscriber setup.
//!
//! Events go to stderr so that stdout stays free for command output and the
//! MCP stdio transport.

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// `RUST_LOG` if set, otherwise the configured level.
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

pub fn try_init(config: &LoggingConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init()
}

/// Install the global subscriber; a second call is a no-op.
pub fn init(config: &LoggingConfig) {
    let _ = try_init(config);
}
