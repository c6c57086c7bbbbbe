use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a full `EnvFilter` directive
const LOG_ENV: &str = "GCM_LOG";

/// Installs a stderr subscriber so logs never mix with git's stdout.
///
/// `GCM_LOG` wins over `verbose` when set.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
