use chrono::{DateTime, Utc};
use serde_json::Value;

use super::field_order::{KeyOrder, LEVEL_KEY, MESSAGE_KEY, TIME_KEY};
use super::{Fields, Level};

/// A single log record handed to a backend.
///
/// `time`, `level` and `message` are rendered from the entry itself; the
/// adapter-supplied reserved fields (`prefix`, `error`) travel in `fields`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    pub fields: Fields,
}

impl Entry {
    pub fn new(level: Level, message: impl Into<String>, fields: Fields) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            fields,
        }
    }

    /// Every rendered key/value pair, sorted with `order`.
    ///
    /// User fields named `time`, `level` or `message` are renamed to
    /// `fields.<key>` so they cannot shadow the synthesized header. A user
    /// field already named `fields.<key>` wins over the renamed one. Passing
    /// `None` for `time` leaves the timestamp out.
    pub fn rendered_pairs(&self, order: KeyOrder, time: Option<String>) -> Vec<(String, Value)> {
        let mut pairs: Vec<(String, Value)> = Vec::with_capacity(self.fields.len() + 3);

        for (key, value) in self.fields.iter() {
            let key = match key.as_str() {
                TIME_KEY | LEVEL_KEY | MESSAGE_KEY => {
                    let renamed = format!("fields.{key}");
                    if self.fields.contains_key(&renamed) {
                        continue;
                    }
                    renamed
                }
                _ => key.clone(),
            };
            pairs.push((key, value.clone()));
        }

        if let Some(time) = time {
            pairs.push((TIME_KEY.to_string(), Value::String(time)));
        }
        pairs.push((
            LEVEL_KEY.to_string(),
            Value::String(self.level.as_str().to_string()),
        ));
        pairs.push((MESSAGE_KEY.to_string(), Value::String(self.message.clone())));

        pairs.sort_by(|(a, _), (b, _)| order(a, b));
        pairs
    }
}
