use async_trait::async_trait;
use serde::Serialize;

use crate::modules::attachment::application::domain::{AttachmentSlot, UploadedFile};
use crate::modules::record::application::domain::RecordId;

/// Where the uploaded bytes ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageLocation {
    Record,
    Bucket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub files: usize,
    pub storage: StorageLocation,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadAttachmentError {
    #[error("No files uploaded")]
    NoFiles,

    #[error("Only one file may be uploaded")]
    TooManyFiles,

    #[error("File exceeds the maximum size of {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("{0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UploadAttachmentUseCase: Send + Sync {
    /// Replaces the slot's content with `files`, in order.
    async fn execute(
        &self,
        slot: AttachmentSlot,
        id: RecordId,
        files: Vec<UploadedFile>,
    ) -> Result<UploadOutcome, UploadAttachmentError>;
}
