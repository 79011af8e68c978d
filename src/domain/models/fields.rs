//! Structured key/value fields attached to log records.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::errors::{LogError, LogResult};

/// Build a flat key/value sequence for the logger methods.
///
/// Every argument may be any `Serialize` expression; keys are expected to be
/// strings and are checked when the sequence is parsed.
///
/// ```
/// use logbridge::kv;
///
/// let pairs = kv!["task", "ingest", "attempt", 3];
/// assert_eq!(pairs.len(), 4);
/// ```
///
/// # Panics
///
/// Panics if an argument fails to serialize, for example a map with
/// non-string keys. Use [`try_kv!`](crate::try_kv) for values that may not
/// serialize.
#[macro_export]
macro_rules! kv {
    () => {
        [] as [$crate::serde_json::Value; 0]
    };
    ($($item:expr),+ $(,)?) => {
        [$($crate::serde_json::json!($item)),+]
    };
}

/// Fallible [`kv!`]: serialization failures come back as
/// [`LogError::Serialization`](crate::LogError::Serialization).
///
/// ```
/// use logbridge::try_kv;
/// use std::collections::HashMap;
///
/// let pairs = try_kv!["task", "ingest"].unwrap();
/// assert_eq!(pairs.len(), 2);
///
/// let grid = HashMap::from([((0, 0), 1)]);
/// assert!(try_kv!["grid", grid].is_err());
/// ```
#[macro_export]
macro_rules! try_kv {
    () => {
        $crate::LogResult::<::std::vec::Vec<$crate::serde_json::Value>>::Ok(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        [$($crate::serde_json::to_value(&$item).map_err($crate::LogError::from)),+]
            .into_iter()
            .collect::<$crate::LogResult<::std::vec::Vec<$crate::serde_json::Value>>>()
    };
}

/// Immutable map of structured fields.
///
/// Cloning is cheap: the map is shared until a derived copy is modified,
/// so a context derived from a parent never changes what the parent sees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(Arc<BTreeMap<String, Value>>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an alternating key/value sequence.
    ///
    /// The sequence must have even length and every key position must hold a
    /// string. A repeated key keeps its last value.
    pub fn from_key_values(key_values: &[Value]) -> LogResult<Self> {
        if key_values.len() % 2 != 0 {
            return Err(LogError::OddKeyValues(key_values.len()));
        }

        let mut map = BTreeMap::new();
        for (pair, chunk) in key_values.chunks_exact(2).enumerate() {
            let Value::String(key) = &chunk[0] else {
                return Err(LogError::NonStringKey {
                    index: pair * 2,
                    key: chunk[0].to_string(),
                });
            };
            map.insert(key.clone(), chunk[1].clone());
        }

        Ok(Self(Arc::new(map)))
    }

    /// Returns a copy holding the union of both maps; `other` wins on conflict.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        let mut map = (*self.0).clone();
        map.extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self(Arc::new(map))
    }

    /// Returns a copy with `key` set to `value`.
    #[must_use]
    pub fn with(&self, key: impl Into<String>, value: Value) -> Self {
        let mut copy = self.clone();
        copy.insert(key, value);
        copy
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        Arc::make_mut(&mut self.0).insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        if !self.0.contains_key(key) {
            return None;
        }
        Arc::make_mut(&mut self.0).remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(Arc::new(
            iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kv, try_kv};
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_empty_sequence() {
        let fields = Fields::from_key_values(&kv![]).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_pairs_are_collected() {
        let fields = Fields::from_key_values(&kv!["a", 1, "b", "two"]).unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("a"), Some(&json!(1)));
        assert_eq!(fields.get("b"), Some(&json!("two")));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let fields = Fields::from_key_values(&kv!["a", 1, "a", 2]).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("a"), Some(&json!(2)));
    }

    #[test]
    fn test_odd_length_rejected() {
        let result = Fields::from_key_values(&kv!["a", 1, "b"]);
        assert!(matches!(result, Err(LogError::OddKeyValues(3))));
    }

    #[test]
    fn test_non_string_key_rejected() {
        let result = Fields::from_key_values(&kv!["a", 1, 42, "x"]);
        match result {
            Err(LogError::NonStringKey { index, key }) => {
                assert_eq!(index, 2);
                assert_eq!(key, "42");
            }
            other => panic!("Expected NonStringKey error, got {other:?}"),
        }
    }

    #[test]
    fn test_merged_does_not_touch_receiver() {
        let base = Fields::from_key_values(&kv!["a", 1, "b", 2]).unwrap();
        let extra = Fields::from_key_values(&kv!["b", 3, "c", 4]).unwrap();

        let merged = base.merged(&extra);

        assert_eq!(merged.get("a"), Some(&json!(1)));
        assert_eq!(merged.get("b"), Some(&json!(3)));
        assert_eq!(merged.get("c"), Some(&json!(4)));
        assert_eq!(base.get("b"), Some(&json!(2)));
        assert!(!base.contains_key("c"));
    }

    #[test]
    fn test_insert_on_clone_is_isolated() {
        let base = Fields::from_key_values(&kv!["a", 1]).unwrap();
        let derived = base.with("a", json!("changed"));

        assert_eq!(base.get("a"), Some(&json!(1)));
        assert_eq!(derived.get("a"), Some(&json!("changed")));
    }

    #[test]
    fn test_remove_on_clone_is_isolated() {
        let base = Fields::from_key_values(&kv!["a", 1, "b", 2]).unwrap();
        let mut derived = base.clone();

        assert_eq!(derived.remove("a"), Some(json!(1)));
        assert_eq!(derived.remove("missing"), None);
        assert!(!derived.contains_key("a"));
        assert_eq!(base.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_try_kv_matches_kv() {
        let attempt = 3;
        assert_eq!(
            try_kv!["task", "ingest", "attempt", attempt].unwrap(),
            kv!["task", "ingest", "attempt", attempt]
        );
        assert!(try_kv![].unwrap().is_empty());
    }

    #[test]
    fn test_try_kv_reports_unserializable_values() {
        let grid: HashMap<(i32, i32), i32> = HashMap::from([((0, 1), 5)]);

        let result = try_kv!["grid", grid, "ok", 1];

        assert!(matches!(result, Err(LogError::Serialization(_))));
    }

    #[test]
    fn test_serializes_as_map() {
        let fields = Fields::from_key_values(&kv!["b", true, "a", Value::Null]).unwrap();
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({"a": null, "b": true})
        );
    }
}
