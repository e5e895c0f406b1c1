pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::hiring::handlers as jobs;
use crate::resume::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resumes", get(resumes::handle_list_resumes))
        .route("/api/v1/resumes/upload", post(resumes::handle_upload))
        .route("/api/v1/resumes/analyze", post(resumes::handle_analyze_text))
        .route("/api/v1/resumes/skills", get(resumes::handle_list_skills))
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get_resume).delete(resumes::handle_delete_resume),
        )
        // Job posting API
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/analyze", post(jobs::handle_analyze_job))
        .route(
            "/api/v1/jobs/:id",
            get(jobs::handle_get_job).delete(jobs::handle_delete_job),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::Body;
    use bytes::Bytes;
    use uuid::Uuid;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::errors::AppError;
    use crate::hiring::classifier::HiringClassifier;
    use crate::hiring::vocabulary::HiringVocabulary;
    use crate::models::job_analysis::JobAnalysisRecord;
    use crate::models::resume::ResumeRecord;
    use crate::resume::analyzer::ResumeAnalyzer;
    use crate::resume::document::DocumentKind;
    use crate::resume::vocabulary::ResumeVocabulary;
    use crate::store::{AnalysisStore, DocumentStore, InMemoryStore, Pagination};

    const RESUME: &str = "Jane Doe\njane.doe@example.com\n(555) 123-4567\n\
        Bachelor of Science in Computer Science, State University\n\
        Led and built data pipelines in Python, SQL, Docker and AWS. Developed APIs.";

    const PIPELINE_POSTING: &str = "Software Engineer (All Levels)\n\
        Requisition: EVERGREEN_ENG_2024\n\
        Join our talent community! We are building a talent pool of engineers.\n\
        Locations: New York, Los Angeles, Chicago, Houston, Phoenix, Seattle, Denver, Boston";

    /// Keeps the keys it was asked to store and delete.
    #[derive(Default)]
    struct RecordingDocuments {
        stored: Mutex<Vec<String>>,
        deleted: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl DocumentStore for RecordingDocuments {
        async fn put(&self, key: &str, _body: Bytes, _kind: DocumentKind) -> Result<(), AppError> {
            self.stored.lock().unwrap().push(key.to_string());
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<(), AppError> {
            self.deleted.lock().unwrap().push(key.to_string());
            Ok(())
        }
    }

    /// A store whose writes always fail.
    struct UnavailableStore;

    fn unavailable() -> AppError {
        AppError::Internal(anyhow::anyhow!("store unavailable"))
    }

    #[async_trait]
    impl AnalysisStore for UnavailableStore {
        async fn insert_resume(&self, _record: &ResumeRecord) -> Result<(), AppError> {
            Err(unavailable())
        }
        async fn get_resume(&self, _id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
            Err(unavailable())
        }
        async fn list_resumes(&self, _page: Pagination) -> Result<(Vec<ResumeRecord>, i64), AppError> {
            Err(unavailable())
        }
        async fn delete_resume(&self, _id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
            Err(unavailable())
        }
        async fn insert_job_analysis(&self, _record: &JobAnalysisRecord) -> Result<(), AppError> {
            Err(unavailable())
        }
        async fn get_job_analysis(&self, _id: Uuid) -> Result<Option<JobAnalysisRecord>, AppError> {
            Err(unavailable())
        }
        async fn list_job_analyses(
            &self,
            _page: Pagination,
        ) -> Result<(Vec<JobAnalysisRecord>, i64), AppError> {
            Err(unavailable())
        }
        async fn delete_job_analysis(
            &self,
            _id: Uuid,
        ) -> Result<Option<JobAnalysisRecord>, AppError> {
            Err(unavailable())
        }
        fn backend(&self) -> &'static str {
            "unavailable"
        }
    }

    fn app() -> Router {
        app_with(Arc::new(InMemoryStore::new()), None)
    }

    fn app_with(
        store: Arc<dyn AnalysisStore>,
        documents: Option<Arc<dyn DocumentStore>>,
    ) -> Router {
        build_router(AppState {
            store,
            documents,
            resume_analyzer: Arc::new(ResumeAnalyzer::new(&ResumeVocabulary::default()).unwrap()),
            hiring_classifier: Arc::new(
                HiringClassifier::new(&HiringVocabulary::default()).unwrap(),
            ),
        })
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, value)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn multipart_request(field: &str, filename: &str, content: &str) -> Request<Body> {
        let boundary = "jobsight-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n\
             {content}\r\n\
             --{boundary}--\r\n"
        );
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/resumes/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_memory_backend() {
        let (status, body) = send(&app(), empty_request(Method::GET, "/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
        assert_eq!(body["documents"], false);
    }

    #[tokio::test]
    async fn test_resume_text_lifecycle() {
        let app = app();
        let (status, created) = send(
            &app,
            json_request(Method::POST, "/api/v1/resumes/analyze", json!({ "text": RESUME })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["analysis"]["contact"]["email"], "jane.doe@example.com");
        assert_eq!(created["analysis"]["skills"][0], "Python");
        let id = created["resume_id"].as_str().unwrap().to_string();

        let (status, fetched) =
            send(&app, empty_request(Method::GET, &format!("/api/v1/resumes/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["analysis"], created["analysis"]);

        let (status, list) = send(&app, empty_request(Method::GET, "/api/v1/resumes")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list["total"], 1);
        assert_eq!(list["limit"], 10);
        assert_eq!(list["items"][0]["resume_id"], id.as_str());

        let (status, _) =
            send(&app, empty_request(Method::DELETE, &format!("/api/v1/resumes/{id}"))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) =
            send(&app, empty_request(Method::GET, &format!("/api/v1/resumes/{id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_empty_resume_text_is_rejected() {
        let (status, body) = send(
            &app(),
            json_request(Method::POST, "/api/v1/resumes/analyze", json!({ "text": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_plain_text_upload_is_analyzed() {
        let (status, body) = send(&app(), multipart_request("file", "resume.txt", RESUME)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["original_filename"], "resume.txt");
        assert!(body.get("storage_key").is_none());
        assert!(body["analysis"]["score"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_type_and_missing_field() {
        let app = app();
        let (status, _) = send(&app, multipart_request("file", "resume.docx", RESUME)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, multipart_request("attachment", "resume.txt", RESUME)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("'file'"));
    }

    #[tokio::test]
    async fn test_skill_vocabulary_endpoint() {
        let (status, body) =
            send(&app(), empty_request(Method::GET, "/api/v1/resumes/skills")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 53);
        assert_eq!(body["skills"][0], "Python");
    }

    #[tokio::test]
    async fn test_job_analysis_lifecycle() {
        let app = app();
        let (status, created) = send(
            &app,
            json_request(
                Method::POST,
                "/api/v1/jobs/analyze",
                json!({ "job_description": PIPELINE_POSTING }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["analysis"]["hiring_type"], "Pipeline/Evergreen");
        assert!(created["analysis"].get("posting_age_days").is_none());
        let id = created["analysis_id"].as_str().unwrap().to_string();

        let (status, list) = send(&app, empty_request(Method::GET, "/api/v1/jobs?limit=500")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list["total"], 1);
        assert_eq!(list["limit"], 100);
        assert_eq!(list["items"][0]["hiring_type"], "Pipeline/Evergreen");

        let (status, _) =
            send(&app, empty_request(Method::DELETE, &format!("/api/v1/jobs/{id}"))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) =
            send(&app, empty_request(Method::DELETE, &format!("/api/v1/jobs/{id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_job_analysis_date_handling() {
        let app = app();
        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/api/v1/jobs/analyze",
                json!({ "job_description": PIPELINE_POSTING, "posted_date": "2020-01-15" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["analysis"]["posting_age_days"].as_i64().unwrap() > 180);

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/api/v1/jobs/analyze",
                json!({ "job_description": PIPELINE_POSTING, "posted_date": "last tuesday" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["posted_date"], "last tuesday");
        assert!(body["analysis"].get("posting_age_days").is_none());
    }

    #[tokio::test]
    async fn test_empty_job_description_is_rejected() {
        let (status, body) = send(
            &app(),
            json_request(Method::POST, "/api/v1/jobs/analyze", json!({ "job_description": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_stored_document_follows_resume_lifecycle() {
        let documents = Arc::new(RecordingDocuments::default());
        let app = app_with(Arc::new(InMemoryStore::new()), Some(documents.clone()));

        let (status, body) = send(&app, multipart_request("file", "resume.txt", RESUME)).await;
        assert_eq!(status, StatusCode::OK);
        let id = body["resume_id"].as_str().unwrap().to_string();
        let key = format!("resumes/{id}.txt");
        assert_eq!(body["storage_key"], key.as_str());
        assert_eq!(*documents.stored.lock().unwrap(), vec![key.clone()]);

        let (status, _) =
            send(&app, empty_request(Method::DELETE, &format!("/api/v1/resumes/{id}"))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(*documents.deleted.lock().unwrap(), vec![key]);
    }

    #[tokio::test]
    async fn test_failed_insert_discards_stored_document() {
        let documents = Arc::new(RecordingDocuments::default());
        let app = app_with(Arc::new(UnavailableStore), Some(documents.clone()));

        let (status, body) = send(&app, multipart_request("file", "resume.txt", RESUME)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");

        let stored = documents.stored.lock().unwrap().clone();
        assert_eq!(stored.len(), 1);
        assert_eq!(*documents.deleted.lock().unwrap(), stored);
    }
}
