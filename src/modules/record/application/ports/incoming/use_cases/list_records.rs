use async_trait::async_trait;

use crate::modules::record::application::domain::{Record, ResourceKind};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListRecordsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListRecordsUseCase: Send + Sync {
    async fn execute(&self, kind: ResourceKind) -> Result<Vec<Record>, ListRecordsError>;
}
