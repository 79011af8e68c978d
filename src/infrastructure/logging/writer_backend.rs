use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::domain::errors::LogResult;
use crate::domain::models::{Context, Entry, Level};
use crate::domain::ports::{Backend, Formatter};
use crate::infrastructure::logging::formatter::TextFormatter;

/// Backend that renders entries with a formatter and writes them to a stream.
pub struct WriterBackend {
    level: Level,
    formatter: Box<dyn Formatter>,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl WriterBackend {
    /// Text-formatted backend at `Info` writing to `writer`.
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            level: Level::Info,
            formatter: Box::new(TextFormatter::new()),
            writer: Mutex::new(Box::new(writer)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Level given to contexts created by this backend.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_formatter(self, formatter: impl Formatter + 'static) -> Self {
        self.with_boxed_formatter(Box::new(formatter))
    }

    #[must_use]
    pub fn with_boxed_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }
}

impl fmt::Debug for WriterBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterBackend")
            .field("level", &self.level)
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}

impl Backend for WriterBackend {
    fn create_context(&self) -> Context {
        Context::new(self.level)
    }

    fn write(&self, entry: &Entry) -> LogResult<()> {
        let bytes = self.formatter.format(entry)?;
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }
}
