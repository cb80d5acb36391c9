//! Tracing setup for the `bmi` binary.
//!
//! Events are written to stderr; stdout is reserved for rendered results,
//! including the JSON that scripts parse.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the subscriber at `warn`
///
/// Evaluation and config loading only emit `debug`/`info` events, so a
/// normal run prints nothing besides its result. `RUST_LOG=debug` shows
/// each validation decision.
pub fn init() {
    init_with_level("warn")
}

/// Install the subscriber with `default_level` as the fallback filter
///
/// A directive in `RUST_LOG` takes precedence over `default_level`.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route events into the test harness's captured output at `debug`
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
