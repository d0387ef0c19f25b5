use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::auth::adapter::incoming::web::extractors::auth::{AuthenticatedUser, INVALID_TOKEN};
use crate::auth::application::use_cases::logout_user::LogoutError;
use crate::shared::api::{ApiError, ApiMessage, ApiResponse};
use crate::AppState;

/// Logout
///
/// Ends the caller's session at the identity provider.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Logout successful", body = ApiMessage,
            example = json!({"message": "Logout successful"})),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 500, description = "Identity provider failure", body = ApiError),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.logout_user_use_case.execute(&user.access_token).await {
        Ok(()) => ApiResponse::message("Logout successful"),

        Err(LogoutError::InvalidToken(reason)) => {
            warn!(user_id = %user.user.id, reason = %reason, "Logout rejected");
            ApiResponse::unauthorized(INVALID_TOKEN)
        }

        Err(LogoutError::ProviderError(msg)) => {
            error!(error = %msg, "Logout failed");
            ApiResponse::upstream_error(&msg)
        }
    }
}
