use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::hiring::classifier::JobPostingAnalysis;

/// Characters of the description shown in list views.
const DESCRIPTION_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobAnalysisRecord {
    pub id: Uuid,
    pub job_description: String,
    /// As submitted, even when it could not be parsed.
    pub posted_date: Option<String>,
    pub hiring_type: String,
    pub confidence: String,
    pub active_score: i32,
    pub passive_score: i32,
    pub analysis: Json<JobPostingAnalysis>,
    pub created_at: DateTime<Utc>,
}

impl JobAnalysisRecord {
    pub fn new(
        job_description: String,
        posted_date: Option<String>,
        analysis: JobPostingAnalysis,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_description,
            posted_date,
            hiring_type: analysis.hiring_type.as_str().to_string(),
            confidence: analysis.confidence.as_str().to_string(),
            active_score: analysis.active_score as i32,
            passive_score: analysis.passive_score as i32,
            analysis: Json(analysis),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobAnalysisSummary {
    pub analysis_id: Uuid,
    pub job_description: String,
    pub posted_date: Option<String>,
    pub hiring_type: String,
    pub confidence: String,
    pub active_score: i32,
    pub passive_score: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&JobAnalysisRecord> for JobAnalysisSummary {
    fn from(record: &JobAnalysisRecord) -> Self {
        Self {
            analysis_id: record.id,
            job_description: preview(&record.job_description),
            posted_date: record.posted_date.clone(),
            hiring_type: record.hiring_type.clone(),
            confidence: record.confidence.clone(),
            active_score: record.active_score,
            passive_score: record.passive_score,
            created_at: record.created_at,
        }
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_PREVIEW_CHARS {
        let head: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
