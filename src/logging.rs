//! Tracing setup for the CLI.
//!
//! Logs go to stderr so rendered documents on stdout stay clean.

use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Map `-v` occurrences to a level: warn, info, debug, then trace.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize the global subscriber. `RUST_LOG` directives are honoured on
/// top of the level picked by `-v`.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity);
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity > 1),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        tracing::debug!(%level, "logging initialized");
    }
}
