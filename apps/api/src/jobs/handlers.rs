//! Axum route handlers for job posting generation.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::jobs::description::{generate_job_description, JobDescriptionRequest};
use crate::jobs::linkedin::generate_linkedin_post;
use crate::models::job::JobPostingRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobDescriptionResponse {
    #[serde(rename = "jobData")]
    pub job_data: JobPostingRecord,
}

#[derive(Debug, Deserialize)]
pub struct LinkedinPostRequest {
    #[serde(default, rename = "jobData")]
    pub job_data: Value,
}

#[derive(Debug, Serialize)]
pub struct LinkedinPostResponse {
    #[serde(rename = "linkedinPost")]
    pub linkedin_post: String,
}

/// POST /generate-job-description/
pub async fn handle_generate_job_description(
    State(state): State<AppState>,
    payload: Result<Json<JobDescriptionRequest>, JsonRejection>,
) -> Result<Json<JobDescriptionResponse>, AppError> {
    let Json(request) = payload?;
    let job_data = generate_job_description(
        state.llm.as_ref(),
        state.company_extractor.as_ref(),
        &state.researcher,
        &request,
    )
    .await?;
    Ok(Json(JobDescriptionResponse { job_data }))
}

/// POST /generate-linkedin-post/
pub async fn handle_generate_linkedin_post(
    State(state): State<AppState>,
    payload: Result<Json<LinkedinPostRequest>, JsonRejection>,
) -> Result<Json<LinkedinPostResponse>, AppError> {
    let Json(request) = payload?;
    let job = JobPostingRecord::from_loose(&request.job_data);
    let linkedin_post = generate_linkedin_post(state.llm.as_ref(), &job).await?;
    Ok(Json(LinkedinPostResponse { linkedin_post }))
}
