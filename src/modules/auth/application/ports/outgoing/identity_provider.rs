use async_trait::async_trait;

use crate::auth::application::domain::entities::{IdentityUser, Session};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// Credentials or token refused by the provider.
    #[error("{0}")]
    Rejected(String),

    #[error("Identity provider error: {0}")]
    Upstream(String),
}

/// External session service. Passwords and tokens are passed through untouched.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError>;

    async fn get_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError>;

    async fn refresh(&self, refresh_token: &str) -> Result<Session, IdentityError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError>;
}
