use serde_json::Value;

/// Flattens a job description into display text.
///
/// A mapping of section name to content renders each pair as `"<key>:\n<content>\n"`,
/// with list content rendered as `- <item>` lines. Blocks keep the mapping's order and
/// are separated by a blank line. Plain strings pass through untouched.
pub fn flatten_description(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(sections) => sections
            .iter()
            .map(|(key, content)| format!("{key}:\n{}\n", render_content(content)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => render_content(other),
    }
}

fn render_content(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| format!("- {}", render_scalar(item)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => render_scalar(other),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
