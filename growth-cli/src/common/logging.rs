use tracing_subscriber::EnvFilter;

/// Env var holding the log filter, e.g. `GROWTH_LOG=debug`.
pub const LOG_ENV: &str = "GROWTH_LOG";

/// Logs go to stderr so they never mix with rendered views. Quiet (`warn`) unless `GROWTH_LOG` says otherwise.
pub fn enable_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
