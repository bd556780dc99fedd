use std::env;

use tracing_appender::non_blocking::WorkerGuard;
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{ConfigPaths, LogLevel};

const LOG_FORMAT_VAR: &str = "ENCORE_LOG_FORMAT";

fn env_filter(fallback: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback.to_string()))
}

fn use_json() -> bool {
    env::var(LOG_FORMAT_VAR).is_ok_and(|format| format == "json")
}

/// Initialize tracing for one-shot commands
///
/// Uses `RUST_LOG` if set, otherwise the configured level. Output goes to
/// stderr so command output on stdout stays clean. `ENCORE_LOG_FORMAT=json`
/// switches to JSON lines.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init(level: LogLevel) -> Result<(), Box<dyn std::error::Error>> {
    let registry = tracing_subscriber::registry().with(env_filter(level));

    if use_json() {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}

/// Subscriber whose only output is `writer`, without ANSI colours.
fn file_subscriber<W>(level: LogLevel, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(writer);
    let layer: Box<dyn Layer<Registry> + Send + Sync> = if use_json() {
        Box::new(layer.json())
    } else {
        Box::new(layer.compact())
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter(level))
}

/// Initialize tracing for the interactive shell
///
/// Writes only to a daily rolling log file in the application log directory,
/// so log lines never land between the prompt and command output. The
/// returned guard must be kept alive for the duration of the shell so
/// buffered lines are flushed.
///
/// # Errors
/// Returns error if the log directory or appender cannot be created, or if a
/// global subscriber is already installed
pub fn init_with_file(level: LogLevel) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    const DAYS_TO_KEEP: usize = 7;

    let log_dir = ConfigPaths::log_dir()?;
    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("encore")
        .filename_suffix("log")
        .build(&log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    file_subscriber(level, non_blocking).try_init()?;

    Ok(guard)
}
