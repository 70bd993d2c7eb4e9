//! Cached snapshot storage.
//!
//! One plain UTF-8 text object per key, no metadata and no versioning.
//! [`SnapshotStore`] is the seam the synchronizer talks to; [`S3Store`] is the
//! production backend.

use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to check whether '{key}' exists: {message}")]
    Probe { key: String, message: String },
    #[error("Failed to read '{key}': {message}")]
    Read { key: String, message: String },
    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },
    #[error("Object '{key}' is not valid UTF-8 text")]
    InvalidUtf8 { key: String },
}

pub trait SnapshotStore {
    /// Metadata probe. `Ok(false)` only when the backend positively answers
    /// "not found"; any other failure is an error.
    async fn exists(&self, key: &str) -> Result<bool, StoreError>;
    async fn read(&self, key: &str) -> Result<String, StoreError>;
    /// Creates or overwrites the object.
    async fn write(&self, key: &str, content: &str) -> Result<(), StoreError>;
}

/// Overrides applied on top of the ambient AWS configuration chain.
#[derive(Debug, Clone, Default)]
pub struct S3Settings {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
}

#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Builds a client from the default credential/region chain.
    pub async fn connect(bucket: impl Into<String>, settings: &S3Settings) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;

        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(settings.force_path_style)
            .build();

        Self::new(Client::from_conf(s3_config), bucket)
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl SnapshotStore for S3Store {
    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let result = self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(e) => {
                let status = e.raw_response().map(|response| response.status().as_u16());
                let message = DisplayErrorContext(&e).to_string();
                if status == Some(404) || e.into_service_error().is_not_found() {
                    log::debug!("s3://{}/{} does not exist", self.bucket, key);
                    Ok(false)
                } else {
                    Err(StoreError::Probe {
                        key: key.to_string(),
                        message,
                    })
                }
            }
        }
    }

    async fn read(&self, key: &str) -> Result<String, StoreError> {
        let read_error = |message: String| StoreError::Read {
            key: key.to_string(),
            message,
        };

        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| read_error(DisplayErrorContext(&e).to_string()))?;

        let bytes = object
            .body
            .collect()
            .await
            .map_err(|e| read_error(e.to_string()))?
            .into_bytes();

        String::from_utf8(bytes.to_vec()).map_err(|_| StoreError::InvalidUtf8 {
            key: key.to_string(),
        })
    }

    async fn write(&self, key: &str, content: &str) -> Result<(), StoreError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(CONTENT_TYPE)
            .body(ByteStream::from(content.as_bytes().to_vec()))
            .send()
            .await
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        log::info!("Uploaded snapshot to s3://{}/{}", self.bucket, key);
        Ok(())
    }
}
