//! Resume intake: extract text, have the LLM structure it, normalize, upsert.

use bytes::Bytes;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::extract_upload;
use crate::llm_client::{call_json, CompletionRequest, LlmClient};
use crate::models::candidate::CandidateRecord;
use crate::normalize::coerce_string;
use crate::resume::prompts::RESUME_PARSE_SYSTEM;
use crate::store::CandidateStore;

/// Full upload pipeline. Nothing is written unless every step before the upsert succeeded.
pub async fn ingest_resume(
    llm: &dyn LlmClient,
    store: &dyn CandidateStore,
    user_id: &str,
    file_name: &str,
    data: Bytes,
) -> Result<CandidateRecord, AppError> {
    let user_id = require_user_id(user_id)?;
    let text = extract_upload(file_name, data).await?;
    let extracted = parse_resume_text(llm, &text).await?;

    let record = CandidateRecord::from_loose(user_id, &extracted);
    store.upsert(&record).await?;

    info!(
        "Stored resume for user {}: {} jobs, {} schools, {} skills",
        record.user_id,
        record.job_experience.len(),
        record.education_history.len(),
        record.skills.len()
    );
    Ok(record)
}

/// Asks the LLM for the structured resume. The reply must be a non-empty JSON object.
pub async fn parse_resume_text(llm: &dyn LlmClient, resume_text: &str) -> Result<Value, AppError> {
    let extracted = call_json(
        llm,
        CompletionRequest::new(resume_text)
            .system(RESUME_PARSE_SYSTEM)
            .temperature(0.0)
            .max_tokens(1500),
    )
    .await?;

    match extracted.as_object() {
        Some(obj) if obj.is_empty() => Err(AppError::LlmEmptyOutput),
        Some(_) => Ok(extracted),
        None => Err(AppError::InvalidLlmOutput(
            "resume extraction is not a JSON object".to_string(),
        )),
    }
}

/// Normalizes and upserts a client-edited candidate payload.
pub async fn save_candidate(store: &dyn CandidateStore, payload: &Value) -> Result<CandidateRecord, AppError> {
    let user_id = require_user_id(&coerce_string(payload.get("user_id")))?;
    let record = CandidateRecord::from_loose(user_id, payload);
    store.upsert(&record).await?;
    Ok(record)
}

fn require_user_id(user_id: &str) -> Result<String, AppError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::missing("user_id"));
    }
    Ok(user_id.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::llm_client::stub::StubLlm;
    use crate::store::memory::InMemoryCandidateStore;

    const STUB_EXTRACTION: &str =
        r#"{"full_name":"John Doe","email":"john@x.com","technical_skills":"Python, SQL"}"#;

    #[tokio::test]
    async fn test_txt_resume_end_to_end() {
        let llm = StubLlm::replying(STUB_EXTRACTION);
        let store = InMemoryCandidateStore::default();

        let record = ingest_resume(
            &llm,
            &store,
            "user-1",
            "resume.txt",
            Bytes::from_static(b"John Doe, john@x.com"),
        )
        .await
        .unwrap();

        assert_eq!(record.first_name, "John Doe");
        assert_eq!(record.email, "john@x.com");
        assert_eq!(record.skills, vec!["Python", "SQL"]);
        assert!(record.job_experience.is_empty());
        assert!(record.education_history.is_empty());
        assert!(record.certifications.is_empty());
        assert_eq!(record.github_url, "");

        assert_eq!(store.get("user-1").await, Some(record));
        let prompts = llm.prompts.lock().unwrap();
        assert_eq!(prompts.as_slice(), ["John Doe, john@x.com"]);
    }

    #[tokio::test]
    async fn test_unsupported_file_never_reaches_llm() {
        let llm = StubLlm::replying(STUB_EXTRACTION);
        let store = InMemoryCandidateStore::default();

        let err = ingest_resume(&llm, &store, "u", "resume.rtf", Bytes::from_static(b"x"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UnsupportedFileType(_)));
        assert_eq!(llm.call_count(), 0);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_invalid_llm_output_is_not_persisted() {
        let llm = StubLlm::replying("Sorry, I cannot parse this resume.");
        let store = InMemoryCandidateStore::default();

        let err = ingest_resume(&llm, &store, "u", "cv.txt", Bytes::from_static(b"text"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidLlmOutput(_)));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_empty_object_is_empty_output() {
        let llm = StubLlm::replying("```json\n{}\n```");
        let err = parse_resume_text(&llm, "text").await.unwrap_err();
        assert!(matches!(err, AppError::LlmEmptyOutput));
    }

    #[tokio::test]
    async fn test_array_reply_is_invalid_output() {
        let llm = StubLlm::replying("[1, 2]");
        let err = parse_resume_text(&llm, "text").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidLlmOutput(_)));
    }

    #[tokio::test]
    async fn test_blank_user_id_is_rejected() {
        let llm = StubLlm::replying(STUB_EXTRACTION);
        let store = InMemoryCandidateStore::default();
        let err = ingest_resume(&llm, &store, "  ", "cv.txt", Bytes::from_static(b"text"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingRequiredField(_)));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_save_candidate_normalizes_payload() {
        let store = InMemoryCandidateStore::default();
        let payload = json!({
            "user_id": "u9",
            "first_name": "Grace",
            "skills": "COBOL, Compilers",
            "job_experience": "Navy"
        });

        let record = save_candidate(&store, &payload).await.unwrap();
        assert_eq!(record.skills, vec!["COBOL", "Compilers"]);
        assert!(record.job_experience.is_empty());
        assert_eq!(store.get("u9").await.unwrap().first_name, "Grace");
    }

    #[tokio::test]
    async fn test_save_candidate_requires_user_id() {
        let store = InMemoryCandidateStore::default();
        for payload in [json!({"first_name": "X"}), json!({"user_id": ""}), json!({"user_id": null})] {
            let err = save_candidate(&store, &payload).await.unwrap_err();
            assert!(matches!(err, AppError::MissingRequiredField(_)));
        }
        assert_eq!(store.len().await, 0);
    }
}
