use std::sync::Arc;

use crate::hiring::classifier::HiringClassifier;
use crate::resume::analyzer::ResumeAnalyzer;
use crate::store::{AnalysisStore, DocumentStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres when DATABASE_URL is set, in-memory otherwise.
    pub store: Arc<dyn AnalysisStore>,
    /// Original uploads are only retained when S3 is configured.
    pub documents: Option<Arc<dyn DocumentStore>>,
    pub resume_analyzer: Arc<ResumeAnalyzer>,
    pub hiring_classifier: Arc<HiringClassifier>,
}
