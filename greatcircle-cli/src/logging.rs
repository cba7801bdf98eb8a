//! Logging setup for the CLI.
//!
//! Logs go to stderr so they never mix with command output on stdout.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Level used when nothing else is configured.
pub const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter directive: `RUST_LOG` wins, then `--verbose`, then the
/// config file, then [`DEFAULT_LEVEL`].
pub fn filter_directive(env: Option<&str>, verbose: bool, configured: Option<&str>) -> String {
    if let Some(directive) = env.filter(|d| !d.trim().is_empty()) {
        return directive.to_string();
    }
    if verbose {
        return "debug".to_string();
    }
    configured.unwrap_or(DEFAULT_LEVEL).to_string()
}

/// Install the global tracing subscriber.
///
/// Returns `false` when a subscriber was already installed; that one stays
/// in place.
pub fn init(verbose: bool, configured: Option<&str>) -> bool {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(env.as_deref(), verbose, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, "Subscriber already installed, keeping it");
            false
        }
    }
}
