//! # Structured Logging
//!
//! Initializes the `tracing` subscriber with a configurable format (JSON or
//! pretty) and `RUST_LOG`-based filtering.
//!
//! Log output goes to stderr so stdout carries only the lab's console
//! output. The default level is `warn`, which keeps the simulator's
//! per-payment `info!` events out of an interactive session unless asked
//! for.

use clap::{Args, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable output.
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging flags shared by every binary.
#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Default log filter when `RUST_LOG` is unset (e.g. `info`,
    /// `upilab_sim=debug`).
    #[arg(long, default_value = "warn", env = "UPI_LAB_LOG_LEVEL")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, value_enum, default_value = "pretty", env = "UPI_LAB_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl LogArgs {
    /// Install the global subscriber described by these flags.
    pub fn init(&self) {
        init_logging(&self.log_level, self.log_format);
    }
}

/// Initialize the global tracing subscriber.
///
/// Call this exactly once, early in `main()`.
///
/// `RUST_LOG` overrides `default_level` when set.
pub fn init_logging(default_level: &str, format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
    }

    tracing::debug!(?format, "logging initialized");
}
