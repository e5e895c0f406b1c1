use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::config::S3Config;
use crate::errors::AppError;
use crate::resume::document::DocumentKind;

/// Where original uploads are kept. Keys come from `document_key`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn put(&self, key: &str, body: Bytes, kind: DocumentKind) -> Result<(), AppError>;
    async fn delete(&self, key: &str) -> Result<(), AppError>;
}

/// Object storage for original uploaded resumes (MinIO locally, S3 in production).
#[derive(Clone)]
pub struct DocumentBucket {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl DocumentBucket {
    pub async fn connect(config: &S3Config) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "jobsight-static",
        );

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(credentials)
            .endpoint_url(&config.endpoint)
            .load()
            .await;

        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
            bucket: config.bucket.clone(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl DocumentStore for DocumentBucket {
    async fn put(&self, key: &str, body: Bytes, kind: DocumentKind) -> Result<(), AppError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(kind.content_type())
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("put {key}: {e}")))?;
        info!(key, bucket = %self.bucket, "Stored original document");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("delete {key}: {e}")))?;
        Ok(())
    }
}

pub fn document_key(id: Uuid, kind: DocumentKind) -> String {
    format!("resumes/{id}.{}", kind.extension())
}
