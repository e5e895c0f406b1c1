use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if a partially configured group is missing a variable.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent: analyses are kept in memory for the lifetime of the process.
    pub database_url: Option<String>,
    /// Absent: uploaded documents are analyzed but not retained.
    pub s3: Option<S3Config>,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let s3 = match optional_env("S3_BUCKET") {
            Some(bucket) => Some(S3Config {
                bucket,
                endpoint: require_env("S3_ENDPOINT")?,
                access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
                secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            }),
            None => None,
        };

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            s3,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a positive integer")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
