//! Analysis persistence — pluggable, trait-based store for analysis records.
//!
//! Default: `PgAnalysisStore` (sqlx / PostgreSQL, table `profile_analyses`).
//! `AppState` holds an `Option<Arc<dyn AnalysisStore>>`; it is `None` when no
//! `DATABASE_URL` is configured.

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::analysis::parser::StructuredFeedback;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisRow, NewAnalysis};

/// The `feedback` column value, with the camelCase wire names.
pub fn feedback_json(feedback: &StructuredFeedback) -> Result<Value, AppError> {
    Ok(serde_json::to_value(feedback).context("Failed to serialize analysis feedback")?)
}

/// Write-once store for analyses. Records are never updated or deleted here.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Persists a new analysis and returns the id generated by the store.
    async fn insert(&self, analysis: &NewAnalysis) -> Result<Uuid, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRow>, AppError>;
}

pub struct PgAnalysisStore {
    pool: PgPool,
}

impl PgAnalysisStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisStore for PgAnalysisStore {
    async fn insert(&self, analysis: &NewAnalysis) -> Result<Uuid, AppError> {
        let feedback = feedback_json(&analysis.feedback)?;
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO profile_analyses (link, profile_type, score, feedback, user_id)
            VALUES ($1, $2, $3, $4, NULL)
            RETURNING id
            "#,
        )
        .bind(&analysis.link)
        .bind(analysis.profile_type.as_str())
        .bind(i32::from(analysis.score))
        .bind(Json(feedback))
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRow>, AppError> {
        let row = sqlx::query_as::<_, AnalysisRow>(
            "SELECT id, link, profile_type, score, feedback, user_id, created_at \
             FROM profile_analyses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;

    /// In-process store used by pipeline and route tests.
    #[derive(Default)]
    pub struct MemoryAnalysisStore {
        rows: Mutex<Vec<AnalysisRow>>,
    }

    impl MemoryAnalysisStore {
        pub fn rows(&self) -> Vec<AnalysisRow> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AnalysisStore for MemoryAnalysisStore {
        async fn insert(&self, analysis: &NewAnalysis) -> Result<Uuid, AppError> {
            let row = AnalysisRow {
                id: Uuid::new_v4(),
                link: analysis.link.clone(),
                profile_type: analysis.profile_type.as_str().to_string(),
                score: i32::from(analysis.score),
                feedback: feedback_json(&analysis.feedback)?,
                user_id: None,
                created_at: Utc::now(),
            };
            let id = row.id;
            self.rows.lock().unwrap().push(row);
            Ok(id)
        }

        async fn get(&self, id: Uuid) -> Result<Option<AnalysisRow>, AppError> {
            Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
        }
    }

    /// Store whose writes always fail, for the persistence-error path.
    pub struct FailingAnalysisStore;

    #[async_trait]
    impl AnalysisStore for FailingAnalysisStore {
        async fn insert(&self, _analysis: &NewAnalysis) -> Result<Uuid, AppError> {
            Err(AppError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn get(&self, _id: Uuid) -> Result<Option<AnalysisRow>, AppError> {
            Err(AppError::Database(sqlx::Error::PoolTimedOut))
        }
    }
}
