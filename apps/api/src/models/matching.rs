use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of scoring one candidate against a job. Computed per call, never persisted.
///
/// `score` is the LLM's free text (`SCORE: <n> | REASON: ...`). When scoring that
/// candidate failed, `score` is null and `error` says why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate_id: Value,
    pub score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MatchResult {
    pub fn scored(candidate_id: Value, score: String) -> Self {
        Self {
            candidate_id,
            score: Some(score),
            error: None,
        }
    }

    pub fn failed(candidate_id: Value, error: String) -> Self {
        Self {
            candidate_id,
            score: None,
            error: Some(error),
        }
    }
}
