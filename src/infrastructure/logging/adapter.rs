//! Logger adapter: the generic [`Logger`] contract on top of a [`Backend`].

use serde_json::Value;
use std::error::Error as StdError;
use std::sync::Arc;

use crate::domain::errors::{LogError, LogResult};
use crate::domain::models::field_order::{ERROR_KEY, PREFIX_KEY};
use crate::domain::models::{Context, Fields, Level};
use crate::domain::ports::{Backend, InfoLogger, Logger};
use crate::infrastructure::logging::config::LogConfig;
use crate::infrastructure::logging::logger::build_backend;

/// Structured logger backed by a leveled [`Backend`].
///
/// The adapter owns a [`Context`] value and shares the backend. Every
/// derivation copies the context, so a derived logger never changes the
/// level or fields of the logger it came from.
///
/// # Examples
///
/// ```
/// use logbridge::infrastructure::logging::{LoggerAdapter, MemoryBackend};
/// use logbridge::domain::ports::{InfoLogger, Logger};
/// use logbridge::kv;
/// use std::sync::Arc;
///
/// let backend = Arc::new(MemoryBackend::new());
/// let logger = LoggerAdapter::new("api", backend.clone()).with_name("users");
///
/// logger.info("created", &kv!["id", 7]).unwrap();
///
/// assert_eq!(
///     backend.lines().unwrap(),
///     ["prefix=api.users level=info message=created id=7"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LoggerAdapter {
    name: String,
    backend: Arc<dyn Backend>,
    context: Context,
}

impl LoggerAdapter {
    /// Create a logger named `name` over a fresh context from `backend`.
    pub fn new(name: impl Into<String>, backend: Arc<dyn Backend>) -> Self {
        let name = name.into();
        let context = backend.create_context();
        tracing::debug!(name = %name, level = %context.level(), "logger adapter constructed");
        Self {
            name,
            backend,
            context,
        }
    }

    pub fn builder() -> LoggerAdapterBuilder {
        LoggerAdapterBuilder::default()
    }

    /// Build the backend described by `config` and a logger on top of it.
    pub fn from_config(config: &LogConfig) -> LogResult<Self> {
        let backend = build_backend(config)?;
        Ok(Self::new(config.name.clone(), backend))
    }

    /// Dot-joined hierarchical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn level(&self) -> Level {
        self.context.level()
    }

    /// Fields accumulated through [`Logger::with_fields`].
    pub const fn fields(&self) -> &Fields {
        self.context.fields()
    }

    pub const fn context(&self) -> &Context {
        &self.context
    }

    fn derive(&self, name: String, context: Context) -> Self {
        tracing::trace!(name = %name, level = %context.level(), "logger adapter derived");
        Self {
            name,
            backend: Arc::clone(&self.backend),
            context,
        }
    }

    fn record_fields(&self, key_values: &[Value]) -> LogResult<Fields> {
        let mut fields = Fields::from_key_values(key_values)?;
        fields.insert(PREFIX_KEY, Value::String(self.name.clone()));
        Ok(fields)
    }
}

impl InfoLogger for LoggerAdapter {
    fn enabled(&self) -> bool {
        self.context.is_level_enabled(self.context.level())
    }

    fn info(&self, message: &str, key_values: &[Value]) -> LogResult<()> {
        let fields = self.record_fields(key_values)?;
        self.backend
            .write_at(&self.context, Level::Info, message, &fields)
    }
}

impl Logger for LoggerAdapter {
    type Verbose = Self;

    fn error(
        &self,
        err: Option<&(dyn StdError + 'static)>,
        message: &str,
        key_values: &[Value],
    ) -> LogResult<()> {
        let mut fields = self.record_fields(key_values)?;
        let err = err.map_or(Value::Null, |e| Value::String(e.to_string()));
        fields.insert(ERROR_KEY, err);
        self.backend
            .write_at(&self.context, Level::Error, message, &fields)
    }

    fn v(&self, level: i32) -> LogResult<Self> {
        let Some(verbosity) = Level::from_index(level) else {
            tracing::warn!(level, name = %self.name, "rejected verbosity outside backend levels");
            return Err(LogError::InvalidVerbosity(level));
        };
        Ok(self.derive(self.name.clone(), self.context.with_level(verbosity)))
    }

    /// `prefix` and `error` are owned by the adapter and are dropped from
    /// context fields; pass them per call instead.
    fn with_fields(&self, key_values: &[Value]) -> LogResult<Self> {
        let mut fields = Fields::from_key_values(key_values)?;
        for key in [PREFIX_KEY, ERROR_KEY] {
            if fields.remove(key).is_some() {
                tracing::debug!(key, name = %self.name, "dropped reserved context field");
            }
        }
        Ok(self.derive(self.name.clone(), self.context.with_fields(&fields)))
    }

    fn with_name(&self, name: &str) -> Self {
        let name = if self.name.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.name)
        };
        self.derive(name, self.context.clone())
    }
}

/// Builder for [`LoggerAdapter`] that reports a missing backend as an error.
#[derive(Debug, Default)]
pub struct LoggerAdapterBuilder {
    name: String,
    backend: Option<Arc<dyn Backend>>,
    level: Option<Level>,
}

impl LoggerAdapterBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Starting level, overriding the backend's default.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn build(self) -> LogResult<LoggerAdapter> {
        let backend = self.backend.ok_or(LogError::MissingBackend)?;
        let mut adapter = LoggerAdapter::new(self.name, backend);
        if let Some(level) = self.level {
            adapter.context = adapter.context.with_level(level);
        }
        Ok(adapter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::logging::MemoryBackend;
    use crate::kv;
    use serde_json::json;
    use std::fmt;

    #[derive(Debug)]
    struct Timeout;

    impl fmt::Display for Timeout {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("upstream timed out")
        }
    }

    impl StdError for Timeout {}

    fn setup(name: &str) -> (Arc<MemoryBackend>, LoggerAdapter) {
        let backend = Arc::new(MemoryBackend::new());
        let logger = LoggerAdapter::new(name, backend.clone());
        (backend, logger)
    }

    #[test]
    fn test_builder_requires_backend() {
        let result = LoggerAdapter::builder().name("svc").build();
        assert!(matches!(result, Err(LogError::MissingBackend)));
    }

    #[test]
    fn test_builder_level_override() {
        let backend = Arc::new(MemoryBackend::new());
        let logger = LoggerAdapter::builder()
            .name("svc")
            .backend(backend)
            .level(Level::Trace)
            .build()
            .unwrap();

        assert_eq!(logger.name(), "svc");
        assert_eq!(logger.level(), Level::Trace);
    }

    #[test]
    fn test_enabled_passes_through() {
        let (_, logger) = setup("svc");
        assert!(logger.enabled());
        assert!(logger.v(0).unwrap().enabled());
        assert!(logger.v(6).unwrap().enabled());
    }

    #[test]
    fn test_info_sets_prefix() {
        let (backend, logger) = setup("svc");

        logger.info("hello", &kv!["k", "v"]).unwrap();

        let entries = backend.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Info);
        assert_eq!(entries[0].message, "hello");
        assert_eq!(entries[0].fields.get("prefix"), Some(&json!("svc")));
        assert_eq!(entries[0].fields.get("k"), Some(&json!("v")));
        assert!(!entries[0].fields.contains_key("error"));
    }

    #[test]
    fn test_error_with_value() {
        let (backend, logger) = setup("svc");

        let err: &(dyn StdError + 'static) = &Timeout;
        logger
            .error(Some(err), "call failed", &kv!["attempt", 2])
            .unwrap();

        let entries = backend.entries();
        assert_eq!(entries[0].level, Level::Error);
        assert_eq!(
            entries[0].fields.get("error"),
            Some(&json!("upstream timed out"))
        );
        assert_eq!(entries[0].fields.get("attempt"), Some(&json!(2)));
    }

    #[test]
    fn test_error_without_value() {
        let (backend, logger) = setup("svc");

        logger.error(None, "m", &kv![]).unwrap();

        assert_eq!(backend.entries()[0].fields.get("error"), Some(&Value::Null));
        assert_eq!(
            backend.lines().unwrap(),
            ["prefix=svc level=error message=m error="]
        );
    }

    #[test]
    fn test_malformed_key_values_write_nothing() {
        let (backend, logger) = setup("svc");

        assert!(matches!(
            logger.info("m", &kv!["odd"]),
            Err(LogError::OddKeyValues(1))
        ));
        assert!(matches!(
            logger.error(None, "m", &kv![1, 2]),
            Err(LogError::NonStringKey { index: 0, .. })
        ));
        assert!(matches!(
            logger.with_fields(&kv!["a", 1, "b"]),
            Err(LogError::OddKeyValues(3))
        ));
        assert!(backend.is_empty());
    }

    #[test]
    fn test_v_rejects_out_of_range() {
        let (_, logger) = setup("svc");
        assert!(matches!(logger.v(-1), Err(LogError::InvalidVerbosity(-1))));
        assert!(matches!(logger.v(7), Err(LogError::InvalidVerbosity(7))));
    }

    #[test]
    fn test_v_filters_records() {
        let (backend, logger) = setup("svc");
        let errors_only = logger.v(2).unwrap();

        errors_only.info("dropped", &kv![]).unwrap();
        errors_only.error(None, "kept", &kv![]).unwrap();

        let entries = backend.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "kept");
    }

    #[test]
    fn test_v_does_not_touch_parent() {
        let (backend, logger) = setup("svc");
        let quiet = logger.v(0).unwrap();

        assert_eq!(quiet.level(), Level::Panic);
        assert_eq!(logger.level(), Level::Info);

        logger.info("still logged", &kv![]).unwrap();
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn test_with_fields_accumulates() {
        let (backend, logger) = setup("svc");
        let child = logger
            .with_fields(&kv!["a", 1, "b", 1])
            .unwrap()
            .with_fields(&kv!["b", 2])
            .unwrap();

        child.info("m", &kv!["c", 3]).unwrap();

        let fields = &backend.entries()[0].fields;
        assert_eq!(fields.get("a"), Some(&json!(1)));
        assert_eq!(fields.get("b"), Some(&json!(2)));
        assert_eq!(fields.get("c"), Some(&json!(3)));
        assert!(logger.fields().is_empty());
    }

    #[test]
    fn test_call_fields_override_context_fields() {
        let (backend, logger) = setup("svc");
        let child = logger.with_fields(&kv!["k", "context"]).unwrap();

        child.info("m", &kv!["k", "call"]).unwrap();

        assert_eq!(backend.entries()[0].fields.get("k"), Some(&json!("call")));
    }

    #[test]
    fn test_with_fields_drops_reserved_keys() {
        let (backend, logger) = setup("svc");
        let child = logger
            .with_fields(&kv!["error", "stale", "prefix", "other", "a", 1])
            .unwrap();

        assert!(!child.fields().contains_key("error"));
        assert!(!child.fields().contains_key("prefix"));
        assert_eq!(child.fields().get("a"), Some(&json!(1)));

        child.info("m", &kv![]).unwrap();
        assert_eq!(
            backend.lines().unwrap(),
            ["prefix=svc level=info message=m a=1"]
        );
    }

    #[test]
    fn test_with_name_joins_segments() {
        let (_, root) = setup("");
        assert_eq!(root.with_name("x").name(), "x");
        assert_eq!(root.with_name("a").with_name("b").name(), "a.b");

        let (_, named) = setup("svc");
        let child = named.with_name("db");
        assert_eq!(child.name(), "svc.db");
        assert_eq!(named.name(), "svc");
    }

    #[test]
    fn test_with_name_keeps_fields_and_level() {
        let (_, logger) = setup("svc");
        let child = logger
            .v(5)
            .unwrap()
            .with_fields(&kv!["a", 1])
            .unwrap()
            .with_name("sub");

        assert_eq!(child.level(), Level::Debug);
        assert_eq!(child.fields().get("a"), Some(&json!(1)));
    }
}
