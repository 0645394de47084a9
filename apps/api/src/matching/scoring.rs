//! Batch candidate scoring with bounded fan-out.
//!
//! Each candidate is scored independently. A failed call only affects that
//! candidate's `MatchResult`; the rest of the batch still completes.

use futures::stream::{self, StreamExt};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::llm_client::prompts::fill_template;
use crate::llm_client::{call_text, CompletionRequest, LlmClient};
use crate::matching::prompts::SCORING_PROMPT_TEMPLATE;
use crate::models::job::JobPostingRecord;
use crate::models::matching::MatchResult;
use crate::normalize::{coerce_list, coerce_string};

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub job: Value,
    pub candidates: Vec<Value>,
}

/// Scores every candidate against `job`, at most `concurrency` LLM calls in flight.
/// Results come back in input order.
pub async fn score_candidates(
    llm: &dyn LlmClient,
    job: &JobPostingRecord,
    candidates: &[Value],
    concurrency: usize,
) -> Vec<MatchResult> {
    info!(
        "Scoring {} candidates for '{}' (concurrency {})",
        candidates.len(),
        job.title,
        concurrency
    );

    // Collect first: a borrowing closure kept inside the stream breaks the `Handler` bound.
    let pending: Vec<_> = candidates
        .iter()
        .map(|candidate| score_one(llm, job, candidate))
        .collect();
    let results: Vec<MatchResult> = stream::iter(pending)
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    info!("Scoring complete: {} scored, {} failed", results.len() - failed, failed);
    results
}

async fn score_one(llm: &dyn LlmClient, job: &JobPostingRecord, candidate: &Value) -> MatchResult {
    let candidate_id = candidate.get("id").cloned().unwrap_or(Value::Null);
    let prompt = build_scoring_prompt(job, candidate);

    match call_text(
        llm,
        CompletionRequest::new(&prompt).temperature(0.2).max_tokens(200),
    )
    .await
    {
        Ok(score) => MatchResult::scored(candidate_id, score),
        Err(e) => {
            warn!("Scoring candidate {candidate_id} failed: {e}");
            MatchResult::failed(candidate_id, e.to_string())
        }
    }
}

fn build_scoring_prompt(job: &JobPostingRecord, candidate: &Value) -> String {
    let name = [
        coerce_string(candidate.get("first_name")),
        coerce_string(candidate.get("last_name")),
    ]
    .iter()
    .map(|part| part.trim())
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ");
    let email = coerce_string(candidate.get("email"));
    let skills = coerce_list(candidate.get("skills")).join(", ");
    let experience = render_history(candidate.get("job_experience"));
    let education = render_history(candidate.get("education_history"));

    fill_template(
        SCORING_PROMPT_TEMPLATE,
        &[
            ("description", job.description.as_str()),
            ("requirements", job.requirements.as_str()),
            ("name", name.as_str()),
            ("email", email.as_str()),
            ("skills", skills.as_str()),
            ("experience", experience.as_str()),
            ("education", education.as_str()),
        ],
    )
}

fn render_history(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
