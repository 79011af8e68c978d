use crate::domain::errors::LogResult;
use crate::domain::models::field_order::{ERROR_KEY, PREFIX_KEY};
use crate::domain::models::{field_order, reserved_position, Context, Entry, KeyOrder, Level};
use crate::domain::ports::Backend;
use crate::infrastructure::logging::formatter::{render_text_pairs, render_text_value};

/// Target of every event emitted by [`TracingBackend`].
pub const TRACING_TARGET: &str = "logbridge";

/// Backend that forwards entries to the active `tracing` subscriber.
///
/// Each entry becomes one event carrying `prefix`, `error` (error entries
/// only) and `fields`, the remaining user fields rendered as `key=value`
/// text in key order. Time and level come from the subscriber.
#[derive(Debug, Clone)]
pub struct TracingBackend {
    level: Level,
    key_order: KeyOrder,
}

impl TracingBackend {
    pub fn new() -> Self {
        Self {
            level: Level::Info,
            key_order: field_order,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }
}

impl Default for TracingBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// `tracing` level used for a backend level.
pub const fn tracing_level(level: Level) -> tracing::Level {
    match level {
        Level::Panic | Level::Fatal | Level::Error => tracing::Level::ERROR,
        Level::Warning => tracing::Level::WARN,
        Level::Info => tracing::Level::INFO,
        Level::Debug => tracing::Level::DEBUG,
        Level::Trace => tracing::Level::TRACE,
    }
}

impl Backend for TracingBackend {
    fn create_context(&self) -> Context {
        Context::new(self.level)
    }

    fn write(&self, entry: &Entry) -> LogResult<()> {
        let prefix = entry
            .fields
            .get(PREFIX_KEY)
            .map(render_text_value)
            .unwrap_or_default();
        let error = entry.fields.get(ERROR_KEY).map(render_text_value);
        let user: Vec<_> = entry
            .rendered_pairs(self.key_order, None)
            .into_iter()
            .filter(|(key, _)| reserved_position(key).is_none())
            .collect();
        let fields = render_text_pairs(&user);
        let message = entry.message.as_str();

        match entry.level {
            Level::Panic | Level::Fatal | Level::Error => tracing::error!(
                target: TRACING_TARGET,
                prefix = %prefix,
                error = error.as_deref(),
                fields = %fields,
                "{message}"
            ),
            Level::Warning => tracing::warn!(
                target: TRACING_TARGET,
                prefix = %prefix,
                error = error.as_deref(),
                fields = %fields,
                "{message}"
            ),
            Level::Info => tracing::info!(
                target: TRACING_TARGET,
                prefix = %prefix,
                error = error.as_deref(),
                fields = %fields,
                "{message}"
            ),
            Level::Debug => tracing::debug!(
                target: TRACING_TARGET,
                prefix = %prefix,
                error = error.as_deref(),
                fields = %fields,
                "{message}"
            ),
            Level::Trace => tracing::trace!(
                target: TRACING_TARGET,
                prefix = %prefix,
                error = error.as_deref(),
                fields = %fields,
                "{message}"
            ),
        }

        Ok(())
    }
}
