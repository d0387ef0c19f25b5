use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::auth::application::use_cases::refresh_token::{
    RefreshTokenError, RefreshTokenRequest,
};
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    pub refresh_token: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponse {
    access_token: String,
    refresh_token: String,
    #[schema(example = 3600)]
    expires_in: Option<i64>,
}

/// Refresh the session
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New token pair", body = RefreshTokenResponse),
        (status = 400, description = "Refresh token missing", body = ApiError,
            example = json!({"error": "Refresh token required"})),
        (status = 401, description = "Refresh token rejected", body = ApiError),
        (status = 500, description = "Identity provider failure", body = ApiError),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match RefreshTokenRequest::new(req.into_inner().refresh_token) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.refresh_token_use_case.execute(request).await {
        Ok(session) => ApiResponse::success(RefreshTokenResponse {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_in: session.expires_in,
        }),

        Err(RefreshTokenError::InvalidToken(msg)) => {
            warn!("Refresh token rejected");
            ApiResponse::unauthorized(&msg)
        }

        Err(RefreshTokenError::ProviderError(msg)) => {
            error!(error = %msg, "Session refresh failed");
            ApiResponse::upstream_error(&msg)
        }
    }
}
