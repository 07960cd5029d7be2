use tracing_subscriber::EnvFilter;

/// Variable checked before `RUST_LOG`.
const LOG_ENV: &str = "QUICKIMPL_LOG";

/// Install the global subscriber, writing to stderr.
///
/// `QUICKIMPL_LOG` wins over `RUST_LOG`; with neither set only warnings are
/// shown, or everything down to debug with `--verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = match std::env::var(LOG_ENV) {
        Ok(value) => EnvFilter::builder().parse_lossy(value),
        Err(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
