use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::Session;
use crate::auth::application::ports::outgoing::{IdentityError, IdentityProvider};

// ========================= Refresh Token Request =========================
#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenRequestError {
    #[error("Refresh token required")]
    MissingToken,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: Option<String>) -> Result<Self, RefreshTokenRequestError> {
        match refresh_token.map(|t| t.trim().to_string()) {
            Some(token) if !token.is_empty() => Ok(Self {
                refresh_token: token,
            }),
            _ => Err(RefreshTokenRequestError::MissingToken),
        }
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

// ====================== Refresh Token Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("{0}")]
    InvalidToken(String),

    #[error("{0}")]
    ProviderError(String),
}

// ============================ Refresh Token Use Case =============================
#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self, request: RefreshTokenRequest) -> Result<Session, RefreshTokenError>;
}

#[derive(Clone)]
pub struct RefreshTokenUseCase {
    identity: Arc<dyn IdentityProvider + Send + Sync>,
}

impl RefreshTokenUseCase {
    pub fn new(identity: Arc<dyn IdentityProvider + Send + Sync>) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl IRefreshTokenUseCase for RefreshTokenUseCase {
    async fn execute(&self, request: RefreshTokenRequest) -> Result<Session, RefreshTokenError> {
        self.identity
            .refresh(request.refresh_token())
            .await
            .map_err(|e| match e {
                IdentityError::Rejected(msg) => RefreshTokenError::InvalidToken(msg),
                IdentityError::Upstream(msg) => RefreshTokenError::ProviderError(msg),
            })
    }
}
