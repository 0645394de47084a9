use serde_json::Value;

use crate::errors::AppError;

/// Strips one leading ```` ``` ```` / ```` ```json ```` marker and one trailing ```` ``` ````
/// marker, then decodes the rest as JSON.
///
/// Blank input is `LlmEmptyOutput`; anything that does not decode is `InvalidLlmOutput`.
pub fn unwrap_json(text: &str) -> Result<Value, AppError> {
    let body = strip_json_fences(text);
    if body.is_empty() {
        return Err(AppError::LlmEmptyOutput);
    }
    serde_json::from_str(body).map_err(|e| AppError::InvalidLlmOutput(e.to_string()))
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let text = match text.strip_prefix("```") {
        Some(rest) => {
            let rest = rest
                .strip_prefix("json")
                .or_else(|| rest.strip_prefix("JSON"))
                .unwrap_or(rest);
            rest.trim_start()
        }
        None => text,
    };
    match text.strip_suffix("```") {
        Some(rest) => rest.trim_end(),
        None => text,
    }
}
