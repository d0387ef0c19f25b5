use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::auth::application::domain::entities::{IdentityUser, Session};
use crate::auth::application::ports::outgoing::{IdentityError, IdentityProvider};

pub const VALID_TOKEN: &str = "valid-token";
pub const BROKEN_TOKEN: &str = "provider-down";
pub const REFRESH_TOKEN: &str = "refresh-token";
pub const OWNER_EMAIL: &str = "owner@example.com";
pub const OWNER_PASSWORD: &str = "correct-horse";
/// Signing in with this email simulates a provider outage.
pub const OUTAGE_EMAIL: &str = "outage@example.com";

mock! {
    pub Identity {}

    #[async_trait]
    impl IdentityProvider for Identity {
        async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError>;
        async fn get_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError>;
        async fn refresh(&self, refresh_token: &str) -> Result<Session, IdentityError>;
        async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError>;
    }
}

pub fn owner() -> IdentityUser {
    IdentityUser {
        id: "user-1".to_string(),
        email: Some(OWNER_EMAIL.to_string()),
    }
}

pub fn owner_session() -> Session {
    Session {
        access_token: VALID_TOKEN.to_string(),
        refresh_token: REFRESH_TOKEN.to_string(),
        expires_in: Some(3600),
        user: Some(owner()),
    }
}

/// Provider with one known account and one valid token.
#[derive(Debug, Clone, Default)]
pub struct FakeIdentityProvider;

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        match (email, password) {
            (OUTAGE_EMAIL, _) => Err(IdentityError::Upstream("connection reset".to_string())),
            (OWNER_EMAIL, OWNER_PASSWORD) => Ok(owner_session()),
            _ => Err(IdentityError::Rejected(
                "Invalid login credentials".to_string(),
            )),
        }
    }

    async fn get_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError> {
        match access_token {
            VALID_TOKEN => Ok(owner()),
            BROKEN_TOKEN => Err(IdentityError::Upstream("connection reset".to_string())),
            _ => Err(IdentityError::Rejected("invalid JWT".to_string())),
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, IdentityError> {
        if refresh_token == REFRESH_TOKEN {
            Ok(owner_session())
        } else {
            Err(IdentityError::Rejected(
                "Invalid Refresh Token: Refresh Token Not Found".to_string(),
            ))
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        match access_token {
            VALID_TOKEN => Ok(()),
            BROKEN_TOKEN => Err(IdentityError::Upstream("connection reset".to_string())),
            _ => Err(IdentityError::Rejected("invalid JWT".to_string())),
        }
    }
}

/// What the bearer extractor reads from app data.
pub fn identity_provider() -> Arc<dyn IdentityProvider + Send + Sync> {
    Arc::new(FakeIdentityProvider)
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
