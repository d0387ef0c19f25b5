use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::skill::application::ports::incoming::use_cases::ListProficiencyLevelsError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Proficiency levels
///
/// Reference data used to label skills.
#[utoipa::path(
    get,
    path = "/api/proficiency-levels",
    tag = "skills",
    responses(
        (status = 200, description = "All proficiency levels", body = [Object]),
        (status = 500, description = "Record store failure", body = ApiError),
    )
)]
#[get("/api/proficiency-levels")]
pub async fn list_proficiency_levels_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_proficiency_levels.execute().await {
        Ok(levels) => ApiResponse::success(levels),
        Err(ListProficiencyLevelsError::RepositoryError(msg)) => {
            error!(error = %msg, "Failed to list proficiency levels");
            ApiResponse::upstream_error(&msg)
        }
    }
}
