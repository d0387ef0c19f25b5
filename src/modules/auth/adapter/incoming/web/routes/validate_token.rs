use actix_web::{post, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::IdentityUser;
use crate::shared::api::{ApiError, ApiResponse};

#[derive(Serialize, ToSchema)]
pub struct ValidateTokenResponse {
    #[schema(example = true)]
    valid: bool,
    user: IdentityUser,
}

/// Token validation
///
/// Succeeds when the bearer token is accepted by the identity provider.
#[utoipa::path(
    post,
    path = "/api/auth/validate",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Token is valid", body = ValidateTokenResponse),
        (status = 401, description = "Missing or invalid token", body = ApiError),
    )
)]
#[post("/api/auth/validate")]
pub async fn validate_token_handler(user: AuthenticatedUser) -> impl Responder {
    ApiResponse::success(ValidateTokenResponse {
        valid: true,
        user: user.user,
    })
}
