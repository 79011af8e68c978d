use std::fmt;

use crate::domain::errors::LogResult;
use crate::domain::models::{Context, Entry, Fields, Level};

/// Renders a log entry into bytes.
///
/// A formatter is fixed when its backend is built and is never swapped
/// afterwards.
pub trait Formatter: Send + Sync + fmt::Debug {
    fn format(&self, entry: &Entry) -> LogResult<Vec<u8>>;
}

/// Port trait for the leveled backend behind a logger adapter.
///
/// The adapter reaches its backend only through this trait plus the
/// [`Context`] value the backend creates:
///
/// - create a context (`create_context`)
/// - read or change the context level (`Context::level`,
///   `Context::with_level`, `Context::is_level_enabled`)
/// - accumulate fields (`Context::with_fields`)
/// - write at a level (`write_at`)
///
/// Implementations must be `Send + Sync`; derived loggers share one backend.
pub trait Backend: Send + Sync + fmt::Debug {
    /// Fresh context at the backend's configured level, with no fields.
    fn create_context(&self) -> Context;

    /// Emit an entry that already passed level filtering.
    fn write(&self, entry: &Entry) -> LogResult<()>;

    /// Write `message` at `level` with the context fields plus `fields`.
    ///
    /// Nothing is written if the context does not enable `level`.
    fn write_at(
        &self,
        context: &Context,
        level: Level,
        message: &str,
        fields: &Fields,
    ) -> LogResult<()> {
        if !context.is_level_enabled(level) {
            return Ok(());
        }
        let entry = Entry::new(level, message, context.fields().merged(fields));
        self.write(&entry)
    }
}
