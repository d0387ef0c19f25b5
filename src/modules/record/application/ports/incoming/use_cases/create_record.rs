use async_trait::async_trait;

use crate::modules::record::application::domain::{Record, ResourceKind};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateRecordError {
    /// Mandatory fields absent, in declaration order.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateRecordUseCase: Send + Sync {
    /// Returns the inserted row(s) as echoed back by the store.
    async fn execute(
        &self,
        kind: ResourceKind,
        payload: Record,
    ) -> Result<Vec<Record>, CreateRecordError>;
}
