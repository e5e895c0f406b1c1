use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::resume::analyzer::ResumeAnalysis;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub original_filename: Option<String>,
    /// Object key of the original document, when document storage is configured.
    pub storage_key: Option<String>,
    pub raw_text: String,
    pub ats_score: i32,
    pub analysis: Json<ResumeAnalysis>,
    pub created_at: DateTime<Utc>,
}

impl ResumeRecord {
    pub fn new(
        original_filename: Option<String>,
        storage_key: Option<String>,
        raw_text: String,
        analysis: ResumeAnalysis,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_filename,
            storage_key,
            raw_text,
            ats_score: analysis.score as i32,
            analysis: Json(analysis),
            created_at: Utc::now(),
        }
    }
}

/// List view: no raw text, no full breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeSummary {
    pub resume_id: Uuid,
    pub original_filename: Option<String>,
    pub ats_score: i32,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&ResumeRecord> for ResumeSummary {
    fn from(record: &ResumeRecord) -> Self {
        Self {
            resume_id: record.id,
            original_filename: record.original_filename.clone(),
            ats_score: record.ats_score,
            skills: record.analysis.skills.clone(),
            created_at: record.created_at,
        }
    }
}
