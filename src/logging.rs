//! Diagnostic logging setup.
//!
//! Library code logs through `tracing` macros. The binary calls
//! [`init_logging`] once to install a subscriber writing to stderr, so
//! command output on stdout stays clean for piping.
//!
//! `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogConfig, LogFormat};

/// Build the filter: `RUST_LOG` if set and valid, else the configured
/// directive, else `warn`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Calling it twice is harmless: the second
/// install fails quietly and the first subscriber stays in place.
pub fn init_logging(config: &LogConfig) {
    let filter = env_filter(&config.level);

    let layer = match config.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .with_filter(filter)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(false)
            .with_filter(filter)
            .boxed(),
    };

    let _ = tracing_subscriber::registry().with(layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_directive_falls_back() {
        // Must not panic on garbage.
        let _ = env_filter("[[[not a filter");
    }

    #[test]
    fn init_twice_does_not_panic() {
        let config = LogConfig {
            level: "debug".into(),
            format: LogFormat::Json,
        };
        init_logging(&config);
        init_logging(&LogConfig::default());
    }
}
