//! Tracing setup.
//!
//! `RUST_LOG` decides verbosity; without it only warnings and errors are
//! written. Output goes to stderr so it never mixes with quotes on stdout.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "RUST_LOG";

/// Build the filter from directives, falling back to WARN when none are given.
///
/// Unparseable directives are skipped rather than rejected.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Install the global subscriber, reading directives from `RUST_LOG`.
pub fn init() {
    let directives = std::env::var(LOG_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

// ============================================================================
// TESTS
// ============================================================================
