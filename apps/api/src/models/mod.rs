pub mod candidate;
pub mod job;
pub mod matching;

use serde_json::Value;

/// Returns the first of `keys` present in `value` with a non-null value.
pub(crate) fn first_present<'v>(value: &'v Value, keys: &[&str]) -> Option<&'v Value> {
    keys.iter()
        .filter_map(|key| value.get(key))
        .find(|v| !v.is_null())
}
