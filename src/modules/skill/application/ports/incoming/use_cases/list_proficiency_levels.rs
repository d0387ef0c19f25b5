use async_trait::async_trait;

use crate::modules::record::application::domain::Record;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProficiencyLevelsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListProficiencyLevelsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Record>, ListProficiencyLevelsError>;
}
