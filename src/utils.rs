//! Helpers for binaries built on this crate.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a `tracing` subscriber that writes to stderr, so that stdout only carries output.
///
/// The filter is read from `RUST_LOG` and defaults to `warn`. Calling this more than once is
/// harmless; only the first subscriber is installed.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
