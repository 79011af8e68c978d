//! Logging infrastructure
//!
//! The logger adapter and the backends behind it:
//! - `LoggerAdapter`: generic logger contract over a leveled backend
//! - Text and JSON formatters with reserved-field ordering
//! - Writer, tracing and in-memory backends
//! - tracing-subscriber initialization for the crate's own diagnostics

pub mod adapter;
pub mod config;
pub mod formatter;
pub mod logger;
pub mod memory_backend;
pub mod tracing_backend;
pub mod writer_backend;

pub use adapter::{LoggerAdapter, LoggerAdapterBuilder};
pub use config::{BackendKind, LogConfig, LogFormat, LogOutput};
pub use formatter::{
    formatter_for, is_valid_timestamp_format, JsonFormatter, TextFormatter, Timestamp,
};
pub use logger::{build_backend, init_subscriber};
pub use memory_backend::MemoryBackend;
pub use tracing_backend::{tracing_level, TracingBackend, TRACING_TARGET};
pub use writer_backend::WriterBackend;
