//! Persistence Store for candidate records, keyed by `user_id`.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::{CandidateRecord, CandidateRow, StoredCandidate};

#[cfg(test)]
pub mod memory;

/// Candidate persistence. Implement this to swap backends without touching handlers.
///
/// Carried in `AppState` as `Arc<dyn CandidateStore>`.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Inserts or fully overwrites the record sharing `record.user_id`. Last write wins.
    async fn upsert(&self, record: &CandidateRecord) -> Result<(), AppError>;

    /// Returns every stored candidate, most recently updated first.
    async fn list(&self) -> Result<Vec<StoredCandidate>, AppError>;
}

/// PostgreSQL-backed store over the `candidates` table.
pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn upsert(&self, record: &CandidateRecord) -> Result<(), AppError> {
        // Single statement: the row is either fully written or not at all.
        sqlx::query(
            r#"
            INSERT INTO candidates
                (user_id, first_name, email, github_url, linkedin_url,
                 job_experience, education_history, skills, certifications, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW())
            ON CONFLICT (user_id) DO UPDATE SET
                first_name        = EXCLUDED.first_name,
                email             = EXCLUDED.email,
                github_url        = EXCLUDED.github_url,
                linkedin_url      = EXCLUDED.linkedin_url,
                job_experience    = EXCLUDED.job_experience,
                education_history = EXCLUDED.education_history,
                skills            = EXCLUDED.skills,
                certifications    = EXCLUDED.certifications,
                updated_at        = NOW()
            "#,
        )
        .bind(&record.user_id)
        .bind(&record.first_name)
        .bind(&record.email)
        .bind(&record.github_url)
        .bind(&record.linkedin_url)
        .bind(Json(&record.job_experience))
        .bind(Json(&record.education_history))
        .bind(&record.skills)
        .bind(&record.certifications)
        .execute(&self.pool)
        .await?;

        info!("Upserted candidate {}", record.user_id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StoredCandidate>, AppError> {
        let rows = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT id, user_id, first_name, email, github_url, linkedin_url,
                   job_experience, education_history, skills, certifications, updated_at
            FROM candidates
            ORDER BY updated_at DESC NULLS LAST
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StoredCandidate::from).collect())
    }
}
