pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate intake
        .route(
            "/parse-and-store-resume/",
            post(resume::handle_parse_and_store_resume),
        )
        .route("/generate-summary/", post(resume::handle_generate_summary))
        .route("/save-candidate/", post(resume::handle_save_candidate))
        // Job postings
        .route(
            "/generate-job-description/",
            post(jobs::handle_generate_job_description),
        )
        .route(
            "/generate-linkedin-post/",
            post(jobs::handle_generate_linkedin_post),
        )
        // Matching
        .route(
            "/api/ai-candidate-search",
            post(matching::handle_ai_candidate_search),
        )
        .route(
            "/api/score-candidates",
            post(matching::handle_score_candidates),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
