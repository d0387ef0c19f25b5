use actix_web::{web, Responder};
use tracing::error;

use crate::modules::record::application::domain::ResourceKind;
use crate::modules::record::application::ports::incoming::use_cases::ListRecordsError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// List records
///
/// Education and work are returned newest first; skills carry `proficiency_label`.
#[utoipa::path(
    get,
    path = "/api/{resource}",
    tag = "records",
    params(("resource" = String, Path, description = "skills, education, work, community, projects or e-portfolio")),
    responses(
        (status = 200, description = "All records of the resource", body = [Object]),
        (status = 500, description = "Record store failure", body = ApiError),
    )
)]
pub async fn list_records_handler(
    kind: web::Data<ResourceKind>,
    data: web::Data<AppState>,
) -> impl Responder {
    let kind = *kind.get_ref();

    match data.record.list.execute(kind).await {
        Ok(rows) => ApiResponse::success(rows),
        Err(ListRecordsError::RepositoryError(msg)) => {
            error!(resource = %kind, error = %msg, "Failed to list records");
            ApiResponse::upstream_error(&msg)
        }
    }
}
