use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job_analysis::JobAnalysisRecord;
use crate::models::resume::ResumeRecord;
use crate::store::{AnalysisStore, Pagination};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisStore for PgStore {
    async fn insert_resume(&self, record: &ResumeRecord) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO resumes
                 (id, original_filename, storage_key, raw_text, ats_score, analysis, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(record.id)
        .bind(&record.original_filename)
        .bind(&record.storage_key)
        .bind(&record.raw_text)
        .bind(record.ats_score)
        .bind(&record.analysis)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        let row = sqlx::query_as::<_, ResumeRecord>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_resumes(&self, page: Pagination) -> Result<(Vec<ResumeRecord>, i64), AppError> {
        let rows = sqlx::query_as::<_, ResumeRecord>(
            "SELECT * FROM resumes ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM resumes")
            .fetch_one(&self.pool)
            .await?;

        Ok((rows, total))
    }

    async fn delete_resume(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        let row =
            sqlx::query_as::<_, ResumeRecord>("DELETE FROM resumes WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    async fn insert_job_analysis(&self, record: &JobAnalysisRecord) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO job_analyses
                 (id, job_description, posted_date, hiring_type, confidence,
                  active_score, passive_score, analysis, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(record.id)
        .bind(&record.job_description)
        .bind(&record.posted_date)
        .bind(&record.hiring_type)
        .bind(&record.confidence)
        .bind(record.active_score)
        .bind(record.passive_score)
        .bind(&record.analysis)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_job_analysis(&self, id: Uuid) -> Result<Option<JobAnalysisRecord>, AppError> {
        let row =
            sqlx::query_as::<_, JobAnalysisRecord>("SELECT * FROM job_analyses WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    async fn list_job_analyses(
        &self,
        page: Pagination,
    ) -> Result<(Vec<JobAnalysisRecord>, i64), AppError> {
        let rows = sqlx::query_as::<_, JobAnalysisRecord>(
            "SELECT * FROM job_analyses ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_analyses")
            .fetch_one(&self.pool)
            .await?;

        Ok((rows, total))
    }

    async fn delete_job_analysis(&self, id: Uuid) -> Result<Option<JobAnalysisRecord>, AppError> {
        let row = sqlx::query_as::<_, JobAnalysisRecord>(
            "DELETE FROM job_analyses WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
