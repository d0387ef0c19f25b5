use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::IdentityUser;
use crate::shared::api::{ApiError, ApiResponse};

#[derive(Serialize, ToSchema)]
pub struct CurrentUserResponse {
    user: IdentityUser,
}

/// Current user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = CurrentUserResponse),
        (status = 401, description = "Missing or invalid token", body = ApiError),
    )
)]
#[get("/api/auth/user")]
pub async fn fetch_user_handler(user: AuthenticatedUser) -> impl Responder {
    ApiResponse::success(CurrentUserResponse { user: user.user })
}
