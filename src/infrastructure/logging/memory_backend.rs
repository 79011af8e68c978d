//! In-memory backend that captures entries for assertions.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::errors::LogResult;
use crate::domain::models::{Context, Entry, Level};
use crate::domain::ports::{Backend, Formatter};
use crate::infrastructure::logging::formatter::{TextFormatter, Timestamp};

/// Backend that keeps every written entry in memory.
///
/// Useful in tests: entries can be inspected directly or rendered with the
/// backend's formatter. The default formatter leaves out timestamps so
/// rendered lines are stable.
#[derive(Debug)]
pub struct MemoryBackend {
    level: Level,
    formatter: Box<dyn Formatter>,
    entries: Mutex<Vec<Entry>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            level: Level::Info,
            formatter: Box::new(TextFormatter::new().with_timestamp(Timestamp::Disabled)),
            entries: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.lock().clone()
    }

    /// Captured entries rendered with the backend's formatter.
    pub fn lines(&self) -> LogResult<Vec<String>> {
        self.lock()
            .iter()
            .map(|entry| {
                let bytes = self.formatter.format(entry)?;
                Ok(String::from_utf8_lossy(&bytes).trim_end().to_string())
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for MemoryBackend {
    fn create_context(&self) -> Context {
        Context::new(self.level)
    }

    fn write(&self, entry: &Entry) -> LogResult<()> {
        self.lock().push(entry.clone());
        Ok(())
    }
}
