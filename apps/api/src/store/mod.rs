pub mod documents;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job_analysis::JobAnalysisRecord;
use crate::models::resume::ResumeRecord;

pub use documents::{DocumentBucket, DocumentStore};
pub use memory::InMemoryStore;
pub use postgres::PgStore;

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// `?limit=&offset=` query parameters shared by every list endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

impl Pagination {
    pub fn clamped(self) -> Self {
        Self {
            limit: self.limit.clamp(1, MAX_PAGE_LIMIT),
            offset: self.offset.max(0),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<T>,
}

/// Persistence for analysis records. Lists are newest first.
/// Deletes return the removed record so callers can clean up attached documents.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn insert_resume(&self, record: &ResumeRecord) -> Result<(), AppError>;
    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError>;
    async fn list_resumes(&self, page: Pagination) -> Result<(Vec<ResumeRecord>, i64), AppError>;
    async fn delete_resume(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError>;

    async fn insert_job_analysis(&self, record: &JobAnalysisRecord) -> Result<(), AppError>;
    async fn get_job_analysis(&self, id: Uuid) -> Result<Option<JobAnalysisRecord>, AppError>;
    async fn list_job_analyses(
        &self,
        page: Pagination,
    ) -> Result<(Vec<JobAnalysisRecord>, i64), AppError>;
    async fn delete_job_analysis(&self, id: Uuid) -> Result<Option<JobAnalysisRecord>, AppError>;

    /// Backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults_and_clamp() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(p.offset, 0);

        let p = Pagination { limit: 500, offset: -3 }.clamped();
        assert_eq!(p.limit, MAX_PAGE_LIMIT);
        assert_eq!(p.offset, 0);

        let p = Pagination { limit: 0, offset: 7 }.clamped();
        assert_eq!(p.limit, 1);
        assert_eq!(p.offset, 7);
    }
}
