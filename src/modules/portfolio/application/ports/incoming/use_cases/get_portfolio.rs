use async_trait::async_trait;

use crate::modules::portfolio::application::domain::PortfolioSnapshot;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioSnapshot, GetPortfolioError>;
}
