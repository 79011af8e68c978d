use logbridge::{kv, Fields, LogError, Logger, LoggerAdapter, MemoryBackend};
use proptest::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use test_strategy::proptest;

fn flatten(pairs: &[(String, i64)]) -> Vec<Value> {
    pairs
        .iter()
        .flat_map(|(k, v)| [Value::from(k.as_str()), Value::from(*v)])
        .collect()
}

/// Property: an even-length sequence yields one entry per distinct key,
/// holding the value of the key's last occurrence
#[proptest]
fn prop_even_sequences_last_wins(
    #[strategy(prop::collection::vec(("[a-d]{1,2}", any::<i64>()), 0..16))] pairs: Vec<(
        String,
        i64,
    )>,
) {
    let fields = Fields::from_key_values(&flatten(&pairs)).unwrap();

    let expected: HashMap<&str, i64> = pairs.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    prop_assert_eq!(fields.len(), expected.len());
    prop_assert!(fields.len() <= pairs.len());
    for (key, value) in expected {
        prop_assert_eq!(fields.get(key), Some(&Value::from(value)));
    }
}

/// Property: odd-length sequences are rejected and nothing is written
#[proptest]
fn prop_odd_sequences_rejected(
    #[strategy(prop::collection::vec(("[a-z]{1,4}", any::<i64>()), 0..8))] pairs: Vec<(
        String,
        i64,
    )>,
) {
    let mut key_values = flatten(&pairs);
    key_values.push(Value::from("dangling"));

    let backend = Arc::new(MemoryBackend::new());
    let logger = LoggerAdapter::new("svc", backend.clone());

    let result = logger.error(None, "m", &key_values);
    prop_assert!(matches!(result, Err(LogError::OddKeyValues(n)) if n == key_values.len()));
    prop_assert!(backend.is_empty());
}

/// Property: a non-string key anywhere is rejected
#[proptest]
fn prop_non_string_key_rejected(
    #[strategy(0usize..6)] prefix_pairs: usize,
    #[any] bad_key: i64,
) {
    let mut key_values: Vec<Value> = (0..prefix_pairs)
        .flat_map(|i| [Value::from(format!("k{i}")), Value::from(i)])
        .collect();
    key_values.extend(kv![bad_key, "value"]);

    let result = Fields::from_key_values(&key_values);
    let rejected =
        matches!(result, Err(LogError::NonStringKey { index, .. }) if index == prefix_pairs * 2);
    prop_assert!(rejected);
}

/// Property: names join with a single dot and never start with one
#[proptest]
fn prop_with_name_joins(
    #[strategy("[a-z]{1,6}")] a: String,
    #[strategy("[a-z]{1,6}")] b: String,
) {
    let logger = LoggerAdapter::new("", Arc::new(MemoryBackend::new()));
    let named = logger.with_name(&a).with_name(&b);
    prop_assert_eq!(named.name(), format!("{a}.{b}"));
    let named_a = logger.with_name(&a);
    prop_assert_eq!(named_a.name(), a.as_str());
}
