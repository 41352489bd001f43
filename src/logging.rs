//! Logger bootstrap for the binary and for tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises the global logger.
///
/// Verbose mode lowers the default filter to debug so the per-tick steering
/// traces become visible; otherwise only info and above are shown. The
/// `RUST_LOG` environment variable still overrides either default.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    // `try_init` only fails when a logger is already installed; tests call
    // `init` repeatedly, so that case is deliberately ignored.
    let _ = builder.try_init();
}
