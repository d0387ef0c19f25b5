use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::IdentityUser;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "owner@example.com")]
    pub email: Option<String>,

    #[schema(example = "correct-horse-battery")]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    message: String,
    access_token: String,
    refresh_token: String,
    /// Access token lifetime in seconds
    #[schema(example = 3600)]
    expires_in: Option<i64>,
    user: Option<IdentityUser>,
}

/// Owner login
///
/// Exchanges email and password for a session issued by the identity provider.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing or malformed credentials", body = ApiError,
            example = json!({"error": "Email and password are required"})),
        (status = 401, description = "Credentials rejected", body = ApiError,
            example = json!({"error": "Invalid login credentials"})),
        (status = 500, description = "Identity provider failure", body = ApiError),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.login_user_use_case.execute(request).await {
        Ok(session) => {
            if let Some(user) = &session.user {
                info!(user_id = %user.id, "User logged in successfully");
            }

            ApiResponse::success(LoginResponse {
                message: "Login successful".to_string(),
                access_token: session.access_token,
                refresh_token: session.refresh_token,
                expires_in: session.expires_in,
                user: session.user,
            })
        }

        Err(LoginError::InvalidCredentials(msg)) => {
            warn!("Login failed: credentials rejected");
            ApiResponse::unauthorized(&msg)
        }

        Err(LoginError::ProviderError(msg)) => {
            error!(error = %msg, "Login failed: identity provider error");
            ApiResponse::upstream_error(&msg)
        }
    }
}
