//! Tracing Subscriber Setup
//!
//! Installs the global `tracing` subscriber.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (default: `info`, with
//!   `lot_size_calculator=info` and `tower_http=info`)
//! - `LOG_FORMAT`: `pretty` or `json` (read by [`AppConfig`](crate::AppConfig))

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::infrastructure::config::{LogFormat, LoggingSettings};

/// Build the env filter, falling back to the service defaults when
/// `RUST_LOG` is unset or unparseable.
#[must_use]
#[allow(clippy::expect_used)]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info")
            .add_directive(
                "lot_size_calculator=info"
                    .parse()
                    .expect("static directive 'lot_size_calculator=info' is valid"),
            )
            .add_directive(
                "tower_http=info"
                    .parse()
                    .expect("static directive 'tower_http=info' is valid"),
            )
            .add_directive(
                "hyper=warn"
                    .parse()
                    .expect("static directive 'hyper=warn' is valid"),
            )
    })
}

/// Initialize the global subscriber.
///
/// Must be called once, before any other component logs.
pub fn init(settings: &LoggingSettings) {
    let registry = tracing_subscriber::registry().with(env_filter());

    match settings.format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_builds() {
        let filter = env_filter();
        assert!(!filter.to_string().is_empty());
    }
}
