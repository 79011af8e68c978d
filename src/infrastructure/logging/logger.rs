use super::config::{BackendKind, LogConfig, LogFormat, LogOutput};
use super::formatter::{formatter_for, is_valid_timestamp_format};
use super::tracing_backend::{tracing_level, TracingBackend};
use super::writer_backend::WriterBackend;
use crate::domain::errors::{LogError, LogResult};
use crate::domain::models::Level;
use crate::domain::ports::Backend;
use anyhow::Result;
use std::io;
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Build the backend described by `config`.
///
/// The formatter is chosen here, once, and stays fixed for the backend's
/// lifetime.
///
/// # Errors
/// Returns an error if `config.level` is not a known level or
/// `config.timestamp_format` is not a valid strftime format
pub fn build_backend(config: &LogConfig) -> LogResult<Arc<dyn Backend>> {
    let level: Level = config.level.parse()?;
    if let Some(format) = config.timestamp_format.as_deref() {
        if !is_valid_timestamp_format(format) {
            return Err(LogError::InvalidTimestampFormat(format.to_string()));
        }
    }

    let backend: Arc<dyn Backend> = match config.backend {
        BackendKind::Writer => {
            let writer = match config.output {
                LogOutput::Stdout => WriterBackend::stdout(),
                LogOutput::Stderr => WriterBackend::stderr(),
            };
            Arc::new(
                writer
                    .with_level(level)
                    .with_boxed_formatter(formatter_for(config)),
            )
        }
        BackendKind::Tracing => Arc::new(TracingBackend::new().with_level(level)),
    };

    tracing::debug!(
        backend = ?config.backend,
        level = %level,
        format = ?config.format,
        "logging backend built"
    );
    Ok(backend)
}

/// Install the global `tracing` subscriber.
///
/// Needed for the tracing backend and for this crate's own diagnostics.
/// The default filter directive comes from `config.level`; `RUST_LOG`
/// overrides it.
///
/// # Errors
/// Returns an error if the level is invalid or a global subscriber is
/// already installed
pub fn init_subscriber(config: &LogConfig) -> Result<()> {
    let level: Level = config.level.parse()?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(tracing_level(level)).into())
        .from_env_lossy();

    let writer = match config.output {
        LogOutput::Stdout => BoxMakeWriter::new(io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(io::stderr),
    };

    match config.format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_current_span(true)
                .with_target(true)
                .with_filter(env_filter);

            tracing_subscriber::registry().with(layer).try_init()?;
        }
        LogFormat::Text => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_filter(env_filter);

            tracing_subscriber::registry().with(layer).try_init()?;
        }
    }

    tracing::info!(
        level = %config.level,
        format = ?config.format,
        output = ?config.output,
        "subscriber initialized"
    );

    Ok(())
}
