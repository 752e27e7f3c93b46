//! Tracing/logging setup shared by the lavka binaries.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging.
///
/// Safe to call multiple times; subsequent calls are no-ops. Verbosity comes
/// from `RUST_LOG`, defaulting to `info`. Diagnostics go to stderr; stdout is
/// reserved for catalog output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
