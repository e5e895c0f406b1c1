mod config;
mod db;
mod errors;
mod hiring;
mod models;
mod resume;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::hiring::classifier::HiringClassifier;
use crate::hiring::vocabulary::HiringVocabulary;
use crate::resume::analyzer::ResumeAnalyzer;
use crate::resume::vocabulary::ResumeVocabulary;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{AnalysisStore, DocumentBucket, DocumentStore, InMemoryStore, PgStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on partially configured groups)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobsight API v{}", env!("CARGO_PKG_VERSION"));

    // Analysis storage
    let store: Arc<dyn AnalysisStore> = match &config.database_url {
        Some(url) => Arc::new(PgStore::new(create_pool(url).await?)),
        None => {
            warn!("DATABASE_URL not set; analyses are kept in memory and lost on restart");
            Arc::new(InMemoryStore::new())
        }
    };

    // Original documents (S3 / MinIO)
    let documents: Option<Arc<dyn DocumentStore>> = match &config.s3 {
        Some(s3) => {
            let bucket = DocumentBucket::connect(s3).await;
            info!("S3 document bucket initialized: {}", bucket.bucket());
            Some(Arc::new(bucket))
        }
        None => {
            info!("S3_BUCKET not set; uploaded documents will not be retained");
            None
        }
    };

    // Analyzers compile their vocabularies once and are shared across requests
    let resume_analyzer = ResumeAnalyzer::new(&ResumeVocabulary::default())
        .context("Failed to compile resume vocabulary")?;
    let hiring_classifier = HiringClassifier::new(&HiringVocabulary::default())
        .context("Failed to compile hiring vocabulary")?;
    info!(
        skills = resume_analyzer.skill_vocabulary().len(),
        "Analyzers initialized"
    );

    let state = AppState {
        store,
        documents,
        resume_analyzer: Arc::new(resume_analyzer),
        hiring_classifier: Arc::new(hiring_classifier),
    };

    // Build router
    let app = build_router(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
