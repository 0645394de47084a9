use serde_json::Value;

/// Coerces a loosely-typed value into a list of strings.
///
/// - array: string elements trimmed, numbers and bools stringified,
///   blank entries, nested containers and nulls dropped
/// - blank string or null: empty list
/// - other string: split on commas, pieces trimmed, empty pieces dropped
/// - anything else: empty list
pub fn coerce_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => scalar_items(items),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

/// Like `coerce_list` but a string is kept whole (one entry per non-blank line)
/// instead of being split on commas. Used for free-text bullets such as
/// responsibilities, where commas are part of the sentence.
pub fn coerce_lines(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => scalar_items(items),
        Some(Value::String(s)) => s
            .lines()
            .map(|line| line.trim().trim_start_matches(['-', '*', '•']).trim())
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

/// Coerces a scalar field into a string. Absent, null and container values become `""`.
pub fn coerce_string(value: Option<&Value>) -> String {
    value.and_then(scalar_to_string).unwrap_or_default()
}

fn scalar_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(scalar_to_string)
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
