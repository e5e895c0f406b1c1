use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::hiring::classifier::JobPostingAnalysis;
use crate::hiring::signals::parse_posted_date;
use crate::models::job_analysis::{JobAnalysisRecord, JobAnalysisSummary};
use crate::state::AppState;
use crate::store::{Page, Pagination};

#[derive(Deserialize)]
pub struct JobAnalysisRequest {
    pub job_description: String,
    /// `YYYY-MM-DD` or an ISO-8601 timestamp. Unparseable values are ignored.
    #[serde(default)]
    pub posted_date: Option<String>,
}

#[derive(Serialize)]
pub struct JobAnalysisResponse {
    pub analysis_id: Uuid,
    pub posted_date: Option<String>,
    pub analysis: JobPostingAnalysis,
    pub created_at: DateTime<Utc>,
}

impl From<JobAnalysisRecord> for JobAnalysisResponse {
    fn from(record: JobAnalysisRecord) -> Self {
        Self {
            analysis_id: record.id,
            posted_date: record.posted_date,
            analysis: record.analysis.0,
            created_at: record.created_at,
        }
    }
}

/// POST /api/v1/jobs/analyze
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Json(req): Json<JobAnalysisRequest>,
) -> Result<Json<JobAnalysisResponse>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Job description must not be empty".into(),
        ));
    }

    let posted_raw = req
        .posted_date
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty());
    let posted = posted_raw.as_deref().and_then(|raw| {
        let parsed = parse_posted_date(raw);
        if parsed.is_none() {
            warn!(posted_date = raw, "Ignoring unparseable posting date");
        }
        parsed
    });

    let analysis = state
        .hiring_classifier
        .classify(&req.job_description, posted);
    let record = JobAnalysisRecord::new(req.job_description, posted_raw, analysis);
    state.store.insert_job_analysis(&record).await?;
    info!(
        analysis_id = %record.id,
        hiring_type = %record.hiring_type,
        active = record.active_score,
        passive = record.passive_score,
        "Job posting classified"
    );

    Ok(Json(record.into()))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Page<JobAnalysisSummary>>, AppError> {
    let page = page.clamped();
    let (records, total) = state.store.list_job_analyses(page).await?;
    Ok(Json(Page {
        total,
        limit: page.limit,
        offset: page.offset,
        items: records.iter().map(JobAnalysisSummary::from).collect(),
    }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobAnalysisResponse>, AppError> {
    let record = state
        .store
        .get_job_analysis(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job analysis {id} not found")))?;
    Ok(Json(record.into()))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .store
        .delete_job_analysis(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job analysis {id} not found")))?;
    info!(analysis_id = %id, "Job analysis deleted");
    Ok(StatusCode::NO_CONTENT)
}
