use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{call_text, CompletionRequest, LlmClient};
use crate::resume::prompts::{SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM};

/// Writes a short professional summary from whatever candidate fields the client sent.
pub async fn generate_summary(llm: &dyn LlmClient, candidate: &Value) -> Result<String, AppError> {
    let candidate_json = serde_json::to_string_pretty(candidate)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize candidate: {e}")))?;
    let prompt = fill_template(SUMMARY_PROMPT_TEMPLATE, &[("candidate_json", candidate_json.as_str())]);

    call_text(
        llm,
        CompletionRequest::new(&prompt)
            .system(SUMMARY_SYSTEM)
            .temperature(0.7)
            .max_tokens(300),
    )
    .await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::llm_client::stub::StubLlm;

    #[tokio::test]
    async fn test_summary_prompt_embeds_candidate() {
        let llm = StubLlm::replying("\n Seasoned Rust engineer. \n");
        let summary = generate_summary(&llm, &json!({"first_name": "Ada", "skills": ["Rust"]}))
            .await
            .unwrap();

        assert_eq!(summary, "Seasoned Rust engineer.");
        let prompts = llm.prompts.lock().unwrap();
        assert!(prompts[0].contains("\"first_name\": \"Ada\""));
        assert!(prompts[0].trim_end().ends_with("Professional Summary:"));
    }
}
