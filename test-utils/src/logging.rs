//! Logging.
//!
//! Harness calls emit [`tracing`] events, this installs
//! a subscriber printing them through the test output.

//---------------------------------------------------------------------------------------------------- Use
use crate::config::TracingConfig;

//---------------------------------------------------------------------------------------------------- Logging
/// Install a global [`tracing_subscriber::fmt`] subscriber
/// filtered at [`TracingConfig::level`].
///
/// Output goes through the test writer, so it is captured
/// per test like `println!`.
///
/// Only the first call installs the subscriber,
/// later calls (e.g. from other tests) do nothing.
pub fn init_logging(config: &TracingConfig) {
    let result = tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_target(false)
        .with_test_writer()
        .try_init();

    drop(result);
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    /// Repeated calls must not panic.
    #[test]
    fn init_twice() {
        init_logging(&TracingConfig::default());
        init_logging(&TracingConfig {
            level: LevelFilter::TRACE,
        });
        tracing::info!("logging initialized");
    }
}
