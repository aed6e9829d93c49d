//! Tracing subscriber setup

use std::io;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a stderr subscriber filtered by `RUST_LOG`. Does nothing when the
/// variable is unset so regular output stays clean.
pub fn init() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time();

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(EnvFilter::from_default_env())
        .try_init();
}
