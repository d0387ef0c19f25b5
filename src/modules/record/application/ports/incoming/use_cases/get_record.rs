use async_trait::async_trait;

use crate::modules::record::application::domain::{Record, RecordId, ResourceKind};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRecordError {
    #[error("{0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetRecordUseCase: Send + Sync {
    async fn execute(&self, kind: ResourceKind, id: RecordId) -> Result<Record, GetRecordError>;
}
