// Cross-cutting prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Appended to the system prompt of every call that expects a JSON reply.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

/// Fills `{name}` placeholders in one pass over the template.
/// Substituted values are never rescanned; unknown placeholders are left as they are.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            values
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_each_placeholder() {
        let filled = fill_template("Hi {name}, re: {topic}.", &[("name", "Ada"), ("topic", "SQL")]);
        assert_eq!(filled, "Hi Ada, re: SQL.");
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let filled = fill_template(
            "Job: {description}\nEmail: {email}",
            &[("description", "Send CV to {email}"), ("email", "cand@x.com")],
        );
        assert_eq!(filled, "Job: Send CV to {email}\nEmail: cand@x.com");
    }

    #[test]
    fn test_fill_template_keeps_unknown_placeholders() {
        assert_eq!(fill_template("{a} {b}", &[("a", "1")]), "1 {b}");
    }
}
