// crates/connect-perf-cli/src/logging.rs
// ============================================================================
// Module: Logging Setup
// Description: tracing-subscriber installation for the perf binary.
// Purpose: Emit timestamped, leveled log lines filtered by RUST_LOG.
// Dependencies: tracing-subscriber
// ============================================================================

//! ## Overview
//! Log lines go to stderr through the `fmt` layer. The filter comes from
//! `RUST_LOG` when it parses, and falls back to `info` otherwise so a typo in
//! the variable never silences the run.

use std::env;
use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset, empty, or invalid.
pub(crate) const DEFAULT_FILTER: &str = "info";

/// Environment variable holding filter directives.
const FILTER_ENV: &str = "RUST_LOG";

/// Picks the filter directives to install.
pub(crate) fn filter_directives(requested: Option<&str>) -> &str {
    match requested.map(str::trim) {
        Some(value) if !value.is_empty() && EnvFilter::try_new(value).is_ok() => value,
        _ => DEFAULT_FILTER,
    }
}

/// Installs the global subscriber. Safe to call once per process.
pub(crate) fn init() {
    let requested = env::var(FILTER_ENV).ok();
    let directives = filter_directives(requested.as_deref());
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber installed earlier (tests, embedding) keeps precedence.
    drop(
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(io::stderr).with_target(false))
            .try_init(),
    );
}
