use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlobBucketError {
    #[error("Storage rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Storage unreachable: {0}")]
    Transport(String),
}

/// Object storage used when a blob column is unavailable.
#[async_trait]
pub trait BlobBucket: Send + Sync {
    /// Creates or replaces the object at `path`.
    async fn put(&self, path: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<(), BlobBucketError>;

    /// `Ok(None)` when no object exists at `path`.
    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, BlobBucketError>;

    /// Removes the object at `path`. `Ok(false)` when there was none.
    async fn delete(&self, path: &str) -> Result<bool, BlobBucketError>;
}
