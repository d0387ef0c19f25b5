use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdentityUser {
    #[schema(example = "6f1c2a8e-2f64-4c55-9d0e-4c1f6a0b9e11")]
    pub id: String,
    #[schema(example = "owner@example.com")]
    pub email: Option<String>,
}

/// Token pair issued on sign-in or refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: Option<i64>,
    pub user: Option<IdentityUser>,
}
