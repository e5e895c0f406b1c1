use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeRecord, ResumeSummary};
use crate::resume::analyzer::ResumeAnalysis;
use crate::resume::document::{extract_text, DocumentKind};
use crate::state::AppState;
use crate::store::documents::document_key;
use crate::store::{DocumentStore, Page, Pagination};

const UPLOAD_FIELD: &str = "file";

#[derive(Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Serialize)]
pub struct ResumeResponse {
    pub resume_id: Uuid,
    pub original_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_key: Option<String>,
    pub raw_text: String,
    pub analysis: ResumeAnalysis,
    pub created_at: DateTime<Utc>,
}

impl From<ResumeRecord> for ResumeResponse {
    fn from(record: ResumeRecord) -> Self {
        Self {
            resume_id: record.id,
            original_filename: record.original_filename,
            storage_key: record.storage_key,
            raw_text: record.raw_text,
            analysis: record.analysis.0,
            created_at: record.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct SkillsResponse {
    pub count: usize,
    pub skills: Vec<String>,
}

/// POST /api/v1/resumes/upload
/// Multipart field `file` holding a `.pdf` or `.txt` resume.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::InvalidInput("Uploaded file has no file name".into()))?;
        upload = Some((filename, field.bytes().await?));
        break;
    }

    let (filename, data) = upload.ok_or_else(|| {
        AppError::InvalidInput(format!("Multipart field '{UPLOAD_FIELD}' is required"))
    })?;
    let kind = DocumentKind::from_filename(&filename)?;
    if data.is_empty() {
        return Err(AppError::InvalidInput("Uploaded file is empty".into()));
    }

    let document = data.clone();
    let raw_text = tokio::task::spawn_blocking(move || extract_text(kind, &document))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Text extraction task failed: {e}")))??;
    if raw_text.is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "No readable text found in '{filename}'"
        )));
    }

    let analysis = state.resume_analyzer.analyze(&raw_text);
    let mut record = ResumeRecord::new(Some(filename), None, raw_text, analysis);

    if let Some(documents) = &state.documents {
        let key = document_key(record.id, kind);
        documents.put(&key, data, kind).await?;
        record.storage_key = Some(key);
    }

    if let Err(e) = state.store.insert_resume(&record).await {
        if let (Some(documents), Some(key)) = (&state.documents, &record.storage_key) {
            discard_document(documents.as_ref(), key, record.id).await;
        }
        return Err(e);
    }
    info!(
        resume_id = %record.id,
        score = record.ats_score,
        skills = record.analysis.skills.len(),
        "Resume uploaded and analyzed"
    );

    Ok(Json(record.into()))
}

/// POST /api/v1/resumes/analyze
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTextRequest>,
) -> Result<Json<ResumeResponse>, AppError> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err(AppError::InvalidInput("Resume text must not be empty".into()));
    }

    let analysis = state.resume_analyzer.analyze(text);
    let record = ResumeRecord::new(req.filename, None, text.to_string(), analysis);
    state.store.insert_resume(&record).await?;
    info!(resume_id = %record.id, score = record.ats_score, "Resume text analyzed");

    Ok(Json(record.into()))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Page<ResumeSummary>>, AppError> {
    let page = page.clamped();
    let (records, total) = state.store.list_resumes(page).await?;
    Ok(Json(Page {
        total,
        limit: page.limit,
        offset: page.offset,
        items: records.iter().map(ResumeSummary::from).collect(),
    }))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeResponse>, AppError> {
    let record = state
        .store
        .get_resume(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(record.into()))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let record = state
        .store
        .delete_resume(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    if let (Some(documents), Some(key)) = (&state.documents, &record.storage_key) {
        discard_document(documents.as_ref(), key, id).await;
    }

    info!(resume_id = %id, "Resume deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Best-effort removal of a stored original; a failure leaves an orphaned object
/// that is only logged.
async fn discard_document(documents: &dyn DocumentStore, key: &str, resume_id: Uuid) {
    if let Err(e) = documents.delete(key).await {
        warn!(resume_id = %resume_id, key = %key, "Failed to delete stored document: {e}");
    }
}

/// GET /api/v1/resumes/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    let skills: Vec<String> = state
        .resume_analyzer
        .skill_vocabulary()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(SkillsResponse {
        count: skills.len(),
        skills,
    })
}
