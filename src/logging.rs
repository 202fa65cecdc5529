// src/logging.rs
//
// Subscriber installation for the binary. The library only emits through
// the `log` facade; the fmt subscriber picks those records up.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` when set and valid, `info` otherwise. Logs go to stderr so
/// command output on stdout stays machine-readable.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_err() {
        log::debug!("A global subscriber is already installed");
    }
}
