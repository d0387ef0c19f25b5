use actix_web::{web, Responder};
use tracing::error;

use crate::modules::record::application::domain::{RecordId, ResourceKind};
use crate::modules::record::application::ports::incoming::use_cases::GetRecordError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Get a record by id
#[utoipa::path(
    get,
    path = "/api/{resource}/{id}",
    tag = "records",
    params(
        ("resource" = String, Path, description = "Resource path segment"),
        ("id" = String, Path, description = "Record id"),
    ),
    responses(
        (status = 200, description = "The record", body = Object),
        (status = 404, description = "No record with that id", body = ApiError,
            example = json!({"error": "Skill not found"})),
        (status = 500, description = "Record store failure", body = ApiError),
    )
)]
pub async fn get_record_handler(
    kind: web::Data<ResourceKind>,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let kind = *kind.get_ref();
    let Ok(id) = RecordId::parse(&path.into_inner()) else {
        return ApiResponse::not_found(&kind.not_found_message());
    };

    match data.record.get.execute(kind, id).await {
        Ok(record) => ApiResponse::success(record),

        Err(GetRecordError::NotFound(msg)) => ApiResponse::not_found(&msg),

        Err(GetRecordError::RepositoryError(msg)) => {
            error!(resource = %kind, error = %msg, "Failed to fetch record");
            ApiResponse::upstream_error(&msg)
        }
    }
}
