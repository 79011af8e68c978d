use serde_json::Value;
use std::error::Error as StdError;

use crate::domain::errors::LogResult;

/// Logger that can only emit informational records.
///
/// This is what [`Logger::v`] hands back: a view of a logger pinned to a
/// particular verbosity.
pub trait InfoLogger: Send + Sync {
    /// Whether this logger is enabled.
    ///
    /// The answer comes straight from the backend context: it reports
    /// whether the context's configured level is enabled for itself.
    fn enabled(&self) -> bool;

    /// Log a message with alternating string keys and arbitrary values.
    ///
    /// # Arguments
    ///
    /// * `message` - The human-readable log message
    /// * `key_values` - Flat sequence `[key, value, key, value, ...]`
    ///
    /// # Errors
    ///
    /// An odd-length sequence or a non-string key is rejected and no
    /// record is written.
    ///
    /// # Examples
    ///
    /// ```
    /// use logbridge::domain::ports::InfoLogger;
    /// use logbridge::kv;
    ///
    /// fn report(logger: &dyn InfoLogger, queued: usize) -> logbridge::LogResult<()> {
    ///     logger.info("queue drained", &kv!["queued", queued])
    /// }
    /// ```
    fn info(&self, message: &str, key_values: &[Value]) -> LogResult<()>;
}

/// Generic structured logger contract.
///
/// Callers program against this trait; adapters translate it onto a
/// concrete leveled backend. Derivations (`v`, `with_fields`, `with_name`)
/// return new loggers and never change the receiver.
///
/// # Examples
///
/// ```
/// use logbridge::domain::ports::{InfoLogger, Logger};
/// use logbridge::kv;
///
/// fn sync_repo<L: Logger>(logger: &L, repo: &str) -> logbridge::LogResult<()> {
///     let logger = logger.with_name("sync").with_fields(&kv!["repo", repo])?;
///     logger.info("starting", &kv![])?;
///     logger.v(5)?.info("fetching refs", &kv!["remote", "origin"])
/// }
/// ```
pub trait Logger: InfoLogger + Sized {
    /// Logger returned by [`Logger::v`].
    type Verbose: InfoLogger;

    /// Log an error with a message and key/value context.
    ///
    /// `err` is data: `None` is valid and renders an empty error field.
    fn error(
        &self,
        err: Option<&(dyn StdError + 'static)>,
        message: &str,
        key_values: &[Value],
    ) -> LogResult<()>;

    /// Logger for a specific verbosity level.
    ///
    /// A higher level means a less important message. Levels outside
    /// `0..7` are rejected.
    fn v(&self, level: i32) -> LogResult<Self::Verbose>;

    /// Logger carrying additional key/value context on every record.
    fn with_fields(&self, key_values: &[Value]) -> LogResult<Self>;

    /// Logger with `name` appended to the dot-joined name.
    #[must_use]
    fn with_name(&self, name: &str) -> Self;
}
