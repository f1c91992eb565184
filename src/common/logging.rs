//! Logging and tracing configuration
//!
//! Logs go to stderr so stdout carries only results.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "fibonacci=warn,warn";

/// Initialize tracing for the CLI
///
/// Logs are controlled by the `RUST_LOG` environment variable, e.g.
/// `RUST_LOG=fibonacci=trace` shows every computed cache entry.
pub fn init_cli() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
