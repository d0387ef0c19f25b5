use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, error};

use crate::modules::attachment::application::ports::outgoing::{BlobBucket, BlobBucketError};
use crate::shared::SupabaseConfig;

/// `BlobBucket` over the hosted storage API, one bucket, service key auth.
#[derive(Clone)]
pub struct SupabaseStorageBucket {
    client: Client,
    storage_url: String,
    bucket: String,
    service_key: String,
}

#[derive(Debug, Default, Deserialize)]
struct StorageErrorBody {
    error: Option<String>,
    message: Option<String>,
    #[serde(rename = "statusCode")]
    status_code: Option<String>,
}

impl SupabaseStorageBucket {
    pub fn new(client: Client, config: &SupabaseConfig) -> Self {
        Self {
            client,
            storage_url: config.storage_url(),
            bucket: config.storage_bucket.clone(),
            service_key: config.service_key.clone(),
        }
    }

    fn object_url(&self, path: &str) -> Result<Url, BlobBucketError> {
        object_url(&self.storage_url, &self.bucket, path)
    }
}

fn object_url(storage_url: &str, bucket: &str, path: &str) -> Result<Url, BlobBucketError> {
    let mut url = Url::parse(&format!("{storage_url}/object"))
        .map_err(|e| BlobBucketError::Transport(format!("invalid storage url: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| BlobBucketError::Transport("storage url cannot be a base".to_string()))?
        .push(bucket)
        .extend(path.split('/'));
    Ok(url)
}

/// Missing objects come back either as 404 or as 400 with a `not_found` error.
fn is_missing(status: StatusCode, body: &str) -> bool {
    if status == StatusCode::NOT_FOUND {
        return true;
    }
    if status != StatusCode::BAD_REQUEST {
        return false;
    }
    let parsed: StorageErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed.status_code.as_deref() == Some("404")
        || parsed
            .error
            .as_deref()
            .is_some_and(|e| e.eq_ignore_ascii_case("not_found"))
}

fn rejected(status: StatusCode, body: &str) -> BlobBucketError {
    let parsed: StorageErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .or(parsed.error)
        .unwrap_or_else(|| status.to_string());
    BlobBucketError::Rejected {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl BlobBucket for SupabaseStorageBucket {
    async fn put(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobBucketError> {
        let url = self.object_url(path)?;
        debug!(path, size = bytes.len(), "storage put");

        let response = self
            .client
            .post(url)
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .header("Content-Type", content_type)
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await
            .map_err(|e| BlobBucketError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        let err = rejected(status, &body);
        error!(path, error = %err, "Storage upload failed");
        Err(err)
    }

    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, BlobBucketError> {
        let url = self.object_url(path)?;
        let response = self
            .client
            .get(url)
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .send()
            .await
            .map_err(|e| BlobBucketError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| BlobBucketError::Transport(e.to_string()))?;
            return Ok(Some(bytes.to_vec()));
        }

        let body = response.text().await.unwrap_or_default();
        if is_missing(status, &body) {
            return Ok(None);
        }
        let err = rejected(status, &body);
        error!(path, error = %err, "Storage download failed");
        Err(err)
    }

    async fn delete(&self, path: &str) -> Result<bool, BlobBucketError> {
        let url = self.object_url(path)?;
        debug!(path, "storage delete");

        let response = self
            .client
            .delete(url)
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .send()
            .await
            .map_err(|e| BlobBucketError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(true);
        }
        let body = response.text().await.unwrap_or_default();
        if is_missing(status, &body) {
            return Ok(false);
        }
        let err = rejected(status, &body);
        error!(path, error = %err, "Storage delete failed");
        Err(err)
    }
}
