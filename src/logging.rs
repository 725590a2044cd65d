//! Subscriber setup for build-tool adapters embedding the inference.
//!
//! The library only emits `tracing` events under the
//! `test_resources_classpath` target; installing a subscriber is left to
//! the host, which can use [`init`] when it has none of its own.
use tracing::Level;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

pub const LOG_TARGET: &str = "test_resources_classpath";

/// How events are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Single-line human-readable output.
    #[default]
    Compact,
    /// One JSON object per event, for build servers that collect logs.
    Json,
}

/// The filter directive enabling this crate's events at `level`.
pub fn directive(level: Level) -> String {
    format!("{LOG_TARGET}={}", level.as_str().to_ascii_lowercase())
}

/// `RUST_LOG` when set and valid, otherwise this crate at `level`.
pub fn filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(level)))
}

/// Installs a global subscriber writing to stderr.
///
/// Fails when the host already installed one, which leaves the host's
/// subscriber in charge.
pub fn init(level: Level, format: LogFormat) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(filter(level));

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time()
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init(),
    }
}
