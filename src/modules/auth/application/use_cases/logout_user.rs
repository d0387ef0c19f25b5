use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::outgoing::{IdentityError, IdentityProvider};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("{0}")]
    InvalidToken(String),

    #[error("{0}")]
    ProviderError(String),
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    /// Ends the session the access token belongs to.
    async fn execute(&self, access_token: &str) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUseCase {
    identity: Arc<dyn IdentityProvider + Send + Sync>,
}

impl LogoutUseCase {
    pub fn new(identity: Arc<dyn IdentityProvider + Send + Sync>) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, access_token: &str) -> Result<(), LogoutError> {
        self.identity
            .sign_out(access_token)
            .await
            .map_err(|e| match e {
                IdentityError::Rejected(msg) => LogoutError::InvalidToken(msg),
                IdentityError::Upstream(msg) => LogoutError::ProviderError(msg),
            })?;

        info!("Session signed out");
        Ok(())
    }
}
