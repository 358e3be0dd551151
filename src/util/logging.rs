// toolcase - util/logging.rs
//
// Structured logging setup for host applications and tests.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - Explicit level passed by the host application
//
// Output: stderr. Never logs file contents, only paths and counts.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `level` is an explicit level requested by the host application.
/// Priority: RUST_LOG env var > explicit level > default "info".
///
/// Safe to call when the host has already installed its own subscriber:
/// the attempt is simply ignored in that case.
pub fn init(level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if let Some(level) = level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            crate_name = super::constants::CRATE_NAME,
            version = super::constants::CRATE_VERSION,
            "Logging initialised"
        );
    }
}
