//! Axum route handlers for candidate matching.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::matching::scoring::{score_candidates, ScoreRequest};
use crate::matching::search::ai_candidate_search;
use crate::models::job::JobPostingRecord;
use crate::models::matching::MatchResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub matches: Vec<Value>,
}

/// POST /api/score-candidates
///
/// Always 200 once the body parses; per-candidate failures are reported inline.
pub async fn handle_score_candidates(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    let Json(request) = payload?;
    let job = JobPostingRecord::from_loose(&request.job);
    let results = score_candidates(
        state.llm.as_ref(),
        &job,
        &request.candidates,
        state.config.scoring_concurrency,
    )
    .await;
    Ok(Json(results))
}

/// POST /api/ai-candidate-search
pub async fn handle_ai_candidate_search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(request) = payload?;
    let matches =
        ai_candidate_search(state.llm.as_ref(), state.store.as_ref(), &request.prompt).await?;
    Ok(Json(SearchResponse { matches }))
}
