use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::domain::entities::Session;
use crate::auth::application::ports::outgoing::{IdentityError, IdentityProvider};

// ========================= Login Request =========================
/// Login input, validated before the identity provider is called.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Invalid email format")]
    InvalidEmailFormat,
}

impl LoginRequest {
    pub fn new(
        email: Option<String>,
        password: Option<String>,
    ) -> Result<Self, LoginRequestError> {
        let email = email.map(|e| e.trim().to_string()).unwrap_or_default();
        let password = password.unwrap_or_default();

        if email.is_empty() || password.trim().is_empty() {
            return Err(LoginRequestError::MissingCredentials);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    InvalidCredentials(String),

    #[error("{0}")]
    ProviderError(String),
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<Session, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase {
    identity: Arc<dyn IdentityProvider + Send + Sync>,
}

impl LoginUserUseCase {
    pub fn new(identity: Arc<dyn IdentityProvider + Send + Sync>) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl ILoginUserUseCase for LoginUserUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<Session, LoginError> {
        self.identity
            .sign_in(request.email(), request.password())
            .await
            .map_err(|e| match e {
                IdentityError::Rejected(msg) => LoginError::InvalidCredentials(msg),
                IdentityError::Upstream(msg) => LoginError::ProviderError(msg),
            })
    }
}
