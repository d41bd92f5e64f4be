//! Tracing setup for the passvault binary
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! `RUST_LOG` wins when set; otherwise the `-v` count picks the level.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::{VaultError, VaultResult};

/// Map a `-v` count to a level: none = warn, 1 = info, 2 = debug, 3+ = trace
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber
pub fn init(verbosity: u8) -> VaultResult<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbosity).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| VaultError::Config(format!("Failed to initialize logging: {}", e)))
}
