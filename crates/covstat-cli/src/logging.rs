use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so tables on stdout stay clean.
/// `RUST_LOG` takes precedence over `--log-level`.
pub fn init(level: LogLevel) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
