//! Logbridge - structured leveled logging behind a generic logger contract
//!
//! Callers program against the [`Logger`] trait (name, verbosity, key/value
//! pairs, hierarchical names, accumulated fields) while records are rendered
//! and written by a leveled [`Backend`].
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): logger and backend ports, levels, fields, records
//! - **Infrastructure Layer** (`infrastructure`): the adapter, formatters,
//!   backends and configuration loading
//!
//! # Example
//!
//! ```
//! use logbridge::{kv, InfoLogger, Logger, LoggerAdapter, WriterBackend};
//! use std::sync::Arc;
//!
//! fn main() -> logbridge::LogResult<()> {
//!     let logger = LoggerAdapter::new("app", Arc::new(WriterBackend::stderr()));
//!
//!     logger.info("starting", &kv!["version", "1.2.0"])?;
//!     logger.with_name("db").v(5)?.info("pool ready", &kv!["size", 8])?;
//!     logger.error(None, "shutdown requested", &kv![])?;
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod infrastructure;

pub use serde_json;

// Re-export commonly used types for convenience
pub use domain::errors::{LogError, LogResult};
pub use domain::models::{field_order, Context, Entry, Fields, Level, RESERVED_KEYS};
pub use domain::ports::{Backend, Formatter, InfoLogger, Logger};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::{
    build_backend, init_subscriber, JsonFormatter, LogConfig, LoggerAdapter, MemoryBackend,
    TextFormatter, TracingBackend, WriterBackend,
};
