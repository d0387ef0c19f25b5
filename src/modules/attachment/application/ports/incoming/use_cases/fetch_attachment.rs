use async_trait::async_trait;

use crate::modules::attachment::application::domain::{AttachmentSlot, MimeType};
use crate::modules::record::application::domain::RecordId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentFile {
    pub bytes: Vec<u8>,
    pub mime: MimeType,
    pub file_name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchAttachmentError {
    #[error("{0}")]
    NotFound(String),

    #[error("Stored file is corrupt")]
    Corrupt,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FetchAttachmentUseCase: Send + Sync {
    async fn execute(
        &self,
        slot: AttachmentSlot,
        id: RecordId,
        index: usize,
    ) -> Result<AttachmentFile, FetchAttachmentError>;
}
