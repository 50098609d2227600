//! Tracing subscriber setup for callers that want pipeline diagnostics

use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
///
/// With `debug` set, every event down to TRACE is written to stderr;
/// otherwise `RUST_LOG` decides (defaulting to warnings only). Returns
/// `false` when a global subscriber was already installed.
pub fn init_tracing(debug: bool) -> bool {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
