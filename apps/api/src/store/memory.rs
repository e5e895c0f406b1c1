use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job_analysis::JobAnalysisRecord;
use crate::models::resume::ResumeRecord;
use crate::store::{AnalysisStore, Pagination};

/// Process-local store used when no database is configured. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryStore {
    resumes: RwLock<Vec<ResumeRecord>>,
    job_analyses: RwLock<Vec<JobAnalysisRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Records are appended in creation order, so newest-first is a reverse walk.
fn page_newest_first<T: Clone>(records: &[T], page: Pagination) -> (Vec<T>, i64) {
    let items = records
        .iter()
        .rev()
        .skip(page.offset as usize)
        .take(page.limit as usize)
        .cloned()
        .collect();
    (items, records.len() as i64)
}

#[async_trait]
impl AnalysisStore for InMemoryStore {
    async fn insert_resume(&self, record: &ResumeRecord) -> Result<(), AppError> {
        self.resumes.write().await.push(record.clone());
        Ok(())
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        let resumes = self.resumes.read().await;
        Ok(resumes.iter().find(|r| r.id == id).cloned())
    }

    async fn list_resumes(&self, page: Pagination) -> Result<(Vec<ResumeRecord>, i64), AppError> {
        Ok(page_newest_first(&self.resumes.read().await, page))
    }

    async fn delete_resume(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        let mut resumes = self.resumes.write().await;
        Ok(resumes
            .iter()
            .position(|r| r.id == id)
            .map(|idx| resumes.remove(idx)))
    }

    async fn insert_job_analysis(&self, record: &JobAnalysisRecord) -> Result<(), AppError> {
        self.job_analyses.write().await.push(record.clone());
        Ok(())
    }

    async fn get_job_analysis(&self, id: Uuid) -> Result<Option<JobAnalysisRecord>, AppError> {
        let analyses = self.job_analyses.read().await;
        Ok(analyses.iter().find(|a| a.id == id).cloned())
    }

    async fn list_job_analyses(
        &self,
        page: Pagination,
    ) -> Result<(Vec<JobAnalysisRecord>, i64), AppError> {
        Ok(page_newest_first(&self.job_analyses.read().await, page))
    }

    async fn delete_job_analysis(&self, id: Uuid) -> Result<Option<JobAnalysisRecord>, AppError> {
        let mut analyses = self.job_analyses.write().await;
        Ok(analyses
            .iter()
            .position(|a| a.id == id)
            .map(|idx| analyses.remove(idx)))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::analyzer::ResumeAnalyzer;
    use crate::resume::vocabulary::ResumeVocabulary;

    fn record(text: &str) -> ResumeRecord {
        let analyzer = ResumeAnalyzer::new(&ResumeVocabulary::default()).unwrap();
        ResumeRecord::new(None, None, text.to_string(), analyzer.analyze(text))
    }

    #[tokio::test]
    async fn test_list_is_newest_first_with_total() {
        let store = InMemoryStore::new();
        let first = record("Python developer");
        let second = record("Rust developer");
        store.insert_resume(&first).await.unwrap();
        store.insert_resume(&second).await.unwrap();

        let (items, total) = store
            .list_resumes(Pagination { limit: 1, offset: 0 })
            .await
            .unwrap();
        assert_eq!(total, 2);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, second.id);

        let (items, _) = store
            .list_resumes(Pagination { limit: 10, offset: 1 })
            .await
            .unwrap();
        assert_eq!(items[0].id, first.id);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record_once() {
        let store = InMemoryStore::new();
        let rec = record("Go engineer");
        store.insert_resume(&rec).await.unwrap();

        let removed = store.delete_resume(rec.id).await.unwrap();
        assert_eq!(removed.map(|r| r.id), Some(rec.id));
        assert!(store.delete_resume(rec.id).await.unwrap().is_none());
        assert!(store.get_resume(rec.id).await.unwrap().is_none());
    }
}
