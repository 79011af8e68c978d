//! Rendering order for record fields.
//!
//! Reserved keys form a fixed header that always renders first, in
//! [`RESERVED_KEYS`] order. Every other key follows in lexicographic order.

use std::cmp::Ordering;

pub const PREFIX_KEY: &str = "prefix";
pub const TIME_KEY: &str = "time";
pub const LEVEL_KEY: &str = "level";
pub const MESSAGE_KEY: &str = "message";
pub const ERROR_KEY: &str = "error";

/// Reserved keys, in rendering order.
pub const RESERVED_KEYS: [&str; 5] = [PREFIX_KEY, TIME_KEY, LEVEL_KEY, MESSAGE_KEY, ERROR_KEY];

/// Comparator used by formatters to order rendered keys.
pub type KeyOrder = fn(&str, &str) -> Ordering;

/// Position of `key` in the reserved header, `None` for user keys.
pub fn reserved_position(key: &str) -> Option<usize> {
    RESERVED_KEYS.iter().position(|reserved| *reserved == key)
}

/// Total order over field keys: reserved header first, then lexicographic.
///
/// ```
/// use logbridge::domain::models::field_order;
///
/// let mut keys = vec!["b", "error", "a", "prefix", "level"];
/// keys.sort_by(|a, b| field_order(a, b));
/// assert_eq!(keys, ["prefix", "level", "error", "a", "b"]);
/// ```
pub fn field_order(a: &str, b: &str) -> Ordering {
    match (reserved_position(a), reserved_position(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
