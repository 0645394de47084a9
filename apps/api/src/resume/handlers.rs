//! Axum route handlers for candidate intake.

use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::JsonRejection,
        Multipart, State,
    },
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::candidate::CandidateRecord;
use crate::resume::ingest::{ingest_resume, save_candidate};
use crate::resume::summary::generate_summary;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct StoreResumeResponse {
    pub status: &'static str,
    pub data: CandidateRecord,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct SaveCandidateResponse {
    pub status: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /parse-and-store-resume/
///
/// Multipart form with `user_id` and a `resume` file (pdf, docx or txt).
pub async fn handle_parse_and_store_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<StoreResumeResponse>, AppError> {
    let mut multipart = multipart?;
    let mut user_id: Option<String> = None;
    let mut resume: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("user_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid user_id field: {e}")))?;
                user_id = Some(text);
            }
            Some("resume") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid resume upload: {e}")))?;
                resume = Some((file_name, data));
            }
            _ => {}
        }
    }

    let user_id = user_id.ok_or_else(|| AppError::missing("user_id"))?;
    let (file_name, data) = resume.ok_or_else(|| AppError::missing("resume"))?;

    let record = ingest_resume(
        state.llm.as_ref(),
        state.store.as_ref(),
        &user_id,
        &file_name,
        data,
    )
    .await?;

    Ok(Json(StoreResumeResponse {
        status: "success",
        data: record,
    }))
}

/// POST /generate-summary/
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SummaryResponse>, AppError> {
    let Json(candidate) = payload?;
    let summary = generate_summary(state.llm.as_ref(), &candidate).await?;
    Ok(Json(SummaryResponse { summary }))
}

/// POST /save-candidate/
pub async fn handle_save_candidate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SaveCandidateResponse>, AppError> {
    let Json(payload) = payload?;
    save_candidate(state.store.as_ref(), &payload).await?;
    Ok(Json(SaveCandidateResponse { status: "success" }))
}
