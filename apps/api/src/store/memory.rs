//! In-memory `CandidateStore` used by handler tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::CandidateStore;
use crate::errors::AppError;
use crate::models::candidate::{CandidateRecord, StoredCandidate};

#[derive(Default)]
pub struct InMemoryCandidateStore {
    rows: RwLock<HashMap<String, StoredCandidate>>,
}

impl InMemoryCandidateStore {
    pub async fn get(&self, user_id: &str) -> Option<CandidateRecord> {
        self.rows
            .read()
            .await
            .get(user_id)
            .map(|stored| stored.record.clone())
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl CandidateStore for InMemoryCandidateStore {
    async fn upsert(&self, record: &CandidateRecord) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let id = rows
            .get(&record.user_id)
            .map(|existing| existing.id)
            .unwrap_or_else(Uuid::new_v4);
        rows.insert(
            record.user_id.clone(),
            StoredCandidate {
                id,
                record: record.clone(),
                updated_at: Some(Utc::now()),
            },
        );
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StoredCandidate>, AppError> {
        let mut all: Vec<_> = self.rows.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_overwrites_by_user_id() {
        let store = InMemoryCandidateStore::default();
        let mut record = CandidateRecord {
            user_id: "u1".to_string(),
            first_name: "Old".to_string(),
            ..Default::default()
        };
        store.upsert(&record).await.unwrap();
        let first_id = store.list().await.unwrap()[0].id;

        record.first_name = "New".to_string();
        store.upsert(&record).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, first_id);
        assert_eq!(all[0].record.first_name, "New");
    }
}
