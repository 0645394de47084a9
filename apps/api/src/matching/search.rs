//! Free-text candidate search: the LLM ranks every stored candidate against a recruiter prompt.

use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{call_json, CompletionRequest, LlmClient};
use crate::matching::prompts::{SEARCH_PROMPT_TEMPLATE, SEARCH_SYSTEM};
use crate::store::CandidateStore;

pub async fn ai_candidate_search(
    llm: &dyn LlmClient,
    store: &dyn CandidateStore,
    prompt: &str,
) -> Result<Vec<Value>, AppError> {
    if prompt.trim().is_empty() {
        return Err(AppError::missing("prompt"));
    }

    let candidates = store.list().await?;
    if candidates.is_empty() {
        info!("Candidate search skipped: no stored candidates");
        return Ok(Vec::new());
    }

    let candidates_json = serde_json::to_string_pretty(&candidates)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize candidates: {e}")))?;
    let llm_prompt = fill_template(
        SEARCH_PROMPT_TEMPLATE,
        &[("prompt", prompt.trim()), ("candidates_json", candidates_json.as_str())],
    );

    let matches = call_json(
        llm,
        CompletionRequest::new(&llm_prompt)
            .system(SEARCH_SYSTEM)
            .temperature(0.3)
            .max_tokens(2000),
    )
    .await?;

    match matches {
        Value::Array(matches) => {
            info!(
                "Candidate search returned {} matches out of {} candidates",
                matches.len(),
                candidates.len()
            );
            Ok(matches)
        }
        _ => Err(AppError::InvalidLlmOutput(
            "candidate search result is not a JSON array".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::StubLlm;
    use crate::models::candidate::CandidateRecord;
    use crate::store::memory::InMemoryCandidateStore;

    async fn store_with_one() -> InMemoryCandidateStore {
        let store = InMemoryCandidateStore::default();
        store
            .upsert(&CandidateRecord {
                user_id: "u1".to_string(),
                first_name: "Linus".to_string(),
                skills: vec!["C".to_string(), "Git".to_string()],
                ..Default::default()
            })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_no_candidates_skips_llm() {
        let llm = StubLlm::replying("[]");
        let store = InMemoryCandidateStore::default();
        let matches = ai_candidate_search(&llm, &store, "kernel hacker").await.unwrap();
        assert!(matches.is_empty());
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_fenced_array_is_returned() {
        let llm = StubLlm::replying(
            "```json\n[{\"id\": \"x\", \"first_name\": \"Linus\", \"match_score\": 97}]\n```",
        );
        let store = store_with_one().await;

        let matches = ai_candidate_search(&llm, &store, "kernel hacker").await.unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["match_score"], 97);
        let prompts = llm.prompts.lock().unwrap();
        assert!(prompts[0].contains("\"kernel hacker\""));
        assert!(prompts[0].contains("\"first_name\": \"Linus\""));
    }

    #[tokio::test]
    async fn test_placeholder_in_recruiter_prompt_stays_literal() {
        let llm = StubLlm::replying("[]");
        let store = store_with_one().await;

        ai_candidate_search(&llm, &store, "rust {candidates_json}").await.unwrap();

        let prompts = llm.prompts.lock().unwrap();
        assert!(prompts[0].contains("\"rust {candidates_json}\""));
        assert_eq!(prompts[0].matches("\"first_name\": \"Linus\"").count(), 1);
    }

    #[tokio::test]
    async fn test_object_reply_is_invalid_output() {
        let llm = StubLlm::replying("{\"matches\": []}");
        let store = store_with_one().await;
        let err = ai_candidate_search(&llm, &store, "anyone").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidLlmOutput(_)));
    }

    #[tokio::test]
    async fn test_prompt_is_required() {
        let llm = StubLlm::replying("[]");
        let store = store_with_one().await;
        let err = ai_candidate_search(&llm, &store, "").await.unwrap_err();
        assert!(matches!(err, AppError::MissingRequiredField(_)));
    }
}
