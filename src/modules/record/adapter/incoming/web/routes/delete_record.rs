use actix_web::{web, Responder};
use tracing::{error, warn};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::record::application::domain::{RecordId, ResourceKind};
use crate::modules::record::application::ports::incoming::use_cases::DeleteRecordError;
use crate::shared::api::{ApiError, ApiMessage, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/{resource}/{id}",
    tag = "records",
    security(("BearerAuth" = [])),
    params(
        ("resource" = String, Path, description = "Resource path segment"),
        ("id" = String, Path, description = "Record id"),
    ),
    responses(
        (status = 200, description = "Record deleted", body = ApiMessage),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 404, description = "No record with that id", body = ApiError),
        (status = 500, description = "Record store failure", body = ApiError),
    )
)]
pub async fn delete_record_handler(
    user: AuthenticatedUser,
    kind: web::Data<ResourceKind>,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let kind = *kind.get_ref();
    let Ok(id) = RecordId::parse(&path.into_inner()) else {
        return ApiResponse::not_found(&kind.not_found_message());
    };

    match data.record.delete.execute(kind, id.clone()).await {
        Ok(()) => ApiResponse::message(&format!("{} deleted successfully", kind.label())),

        Err(DeleteRecordError::NotFound(msg)) => {
            warn!(resource = %kind, id = %id, user_id = %user.user.id, "Delete of missing record");
            ApiResponse::not_found(&msg)
        }

        Err(DeleteRecordError::RepositoryError(msg)) => {
            error!(resource = %kind, id = %id, error = %msg, "Failed to delete record");
            ApiResponse::upstream_error(&msg)
        }
    }
}
