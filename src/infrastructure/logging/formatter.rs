//! Text and JSON formatters.
//!
//! Both render the full key set of an entry (reserved header plus user
//! fields) in the order given by their key comparator.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::fmt::Write as _;

use crate::domain::errors::{LogError, LogResult};
use crate::domain::models::{field_order, Entry, KeyOrder};
use crate::domain::ports::Formatter;
use crate::infrastructure::logging::config::{LogConfig, LogFormat};

/// How the `time` field is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Timestamp {
    #[default]
    Rfc3339,
    /// chrono `strftime`-style format string
    Custom(String),
    Disabled,
}

impl Timestamp {
    fn render(&self, time: &DateTime<Utc>) -> LogResult<Option<String>> {
        match self {
            Self::Rfc3339 => Ok(Some(time.to_rfc3339())),
            Self::Custom(format) => {
                let mut out = String::new();
                write!(out, "{}", time.format(format))
                    .map_err(|_| LogError::InvalidTimestampFormat(format.clone()))?;
                Ok(Some(out))
            }
            Self::Disabled => Ok(None),
        }
    }

    pub fn from_config(config: &LogConfig) -> Self {
        if config.disable_timestamp {
            Self::Disabled
        } else {
            config
                .timestamp_format
                .clone()
                .map_or(Self::Rfc3339, Self::Custom)
        }
    }
}

/// Whether `format` is a strftime string chrono can render.
pub fn is_valid_timestamp_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// `key=value` formatter, one record per line.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    key_order: KeyOrder,
    timestamp: Timestamp,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self {
            key_order: field_order,
            timestamp: Timestamp::default(),
        }
    }

    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &Entry) -> LogResult<Vec<u8>> {
        let pairs = entry.rendered_pairs(self.key_order, self.timestamp.render(&entry.time)?);
        let mut line = render_text_pairs(&pairs);
        line.push('\n');
        Ok(line.into_bytes())
    }
}

/// JSON object formatter, one record per line.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    key_order: KeyOrder,
    timestamp: Timestamp,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {
            key_order: field_order,
            timestamp: Timestamp::default(),
        }
    }

    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &Entry) -> LogResult<Vec<u8>> {
        let pairs = entry.rendered_pairs(self.key_order, self.timestamp.render(&entry.time)?);
        let mut line = serde_json::to_vec(&OrderedPairs(&pairs))?;
        line.push(b'\n');
        Ok(line)
    }
}

/// Sorted pairs serialized as one JSON object, in slice order.
struct OrderedPairs<'a>(&'a [(String, Value)]);

impl Serialize for OrderedPairs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Formatter selected by a [`LogConfig`].
pub fn formatter_for(config: &LogConfig) -> Box<dyn Formatter> {
    let timestamp = Timestamp::from_config(config);
    match config.format {
        LogFormat::Text => Box::new(TextFormatter::new().with_timestamp(timestamp)),
        LogFormat::Json => Box::new(JsonFormatter::new().with_timestamp(timestamp)),
    }
}

/// Join pairs as `key=value` separated by single spaces.
pub(crate) fn render_text_pairs(pairs: &[(String, Value)]) -> String {
    let mut out = String::new();
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{key}=");
        append_text_value(&mut out, value);
    }
    out
}

pub(crate) fn render_text_value(value: &Value) -> String {
    let mut out = String::new();
    append_text_value(&mut out, value);
    out
}

fn append_text_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => {}
        Value::String(s) => append_maybe_quoted(out, s),
        Value::Bool(_) | Value::Number(_) => out.push_str(&value.to_string()),
        Value::Array(_) | Value::Object(_) => append_maybe_quoted(out, &value.to_string()),
    }
}

fn append_maybe_quoted(out: &mut String, s: &str) {
    if needs_quoting(s) {
        // Debug escapes quotes, backslashes and control characters.
        let _ = write!(out, "{s:?}");
    } else {
        out.push_str(s);
    }
}

fn needs_quoting(s: &str) -> bool {
    !s.chars().all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '/' | '@' | '^' | '+')
    })
}
