use actix_web::{web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::record::application::domain::{Record, ResourceKind};
use crate::modules::record::application::ports::incoming::use_cases::CreateRecordError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Create a record
///
/// Only allow-listed fields are written; empty optional fields are omitted.
#[utoipa::path(
    post,
    path = "/api/{resource}",
    tag = "records",
    security(("BearerAuth" = [])),
    params(("resource" = String, Path, description = "Resource path segment")),
    request_body = Object,
    responses(
        (status = 201, description = "Inserted rows", body = Object,
            example = json!({"data": [{"id": 1, "skill_name": "Rust"}], "message": "Skill created successfully"})),
        (status = 400, description = "Mandatory fields missing", body = ApiError,
            example = json!({"error": "Missing required fields: skill_name"})),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 500, description = "Record store failure", body = ApiError),
    )
)]
pub async fn create_record_handler(
    user: AuthenticatedUser,
    kind: web::Data<ResourceKind>,
    payload: web::Json<Record>,
    data: web::Data<AppState>,
) -> impl Responder {
    let kind = *kind.get_ref();

    match data.record.create.execute(kind, payload.into_inner()).await {
        Ok(rows) => {
            info!(resource = %kind, user_id = %user.user.id, "Record created");
            ApiResponse::created(rows, &format!("{} created successfully", kind.label()))
        }

        Err(e @ CreateRecordError::MissingFields(_)) => ApiResponse::bad_request(&e.to_string()),

        Err(CreateRecordError::RepositoryError(msg)) => {
            error!(resource = %kind, error = %msg, "Failed to create record");
            ApiResponse::upstream_error(&msg)
        }
    }
}
