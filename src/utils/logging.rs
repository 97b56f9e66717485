// Logging setup

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset; keeps a successful run silent on stderr
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber, writing to stderr.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
