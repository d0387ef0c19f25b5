use actix_web::{web, Responder};
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::record::application::domain::{Record, RecordId, ResourceKind};
use crate::modules::record::application::ports::incoming::use_cases::UpdateRecordError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Update a record
///
/// Partial update: keys not supplied are left untouched, `""` clears a date.
#[utoipa::path(
    put,
    path = "/api/{resource}/{id}",
    tag = "records",
    security(("BearerAuth" = [])),
    params(
        ("resource" = String, Path, description = "Resource path segment"),
        ("id" = String, Path, description = "Record id"),
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Updated rows", body = Object),
        (status = 400, description = "No allow-listed field supplied", body = ApiError,
            example = json!({"error": "No fields to update"})),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 404, description = "No record with that id", body = ApiError),
        (status = 500, description = "Record store failure", body = ApiError),
    )
)]
pub async fn update_record_handler(
    user: AuthenticatedUser,
    kind: web::Data<ResourceKind>,
    path: web::Path<String>,
    payload: web::Json<Record>,
    data: web::Data<AppState>,
) -> impl Responder {
    let kind = *kind.get_ref();
    let Ok(id) = RecordId::parse(&path.into_inner()) else {
        return ApiResponse::not_found(&kind.not_found_message());
    };

    match data
        .record
        .update
        .execute(kind, id.clone(), payload.into_inner())
        .await
    {
        Ok(rows) => {
            info!(resource = %kind, id = %id, user_id = %user.user.id, "Record updated");
            ApiResponse::updated(rows, &format!("{} updated successfully", kind.label()))
        }

        Err(e @ UpdateRecordError::NoFieldsToUpdate) => ApiResponse::bad_request(&e.to_string()),

        Err(UpdateRecordError::NotFound(msg)) => {
            warn!(resource = %kind, id = %id, "Update of missing record");
            ApiResponse::not_found(&msg)
        }

        Err(UpdateRecordError::RepositoryError(msg)) => {
            error!(resource = %kind, id = %id, error = %msg, "Failed to update record");
            ApiResponse::upstream_error(&msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::record::adapter::incoming::web::routes::resource_scope;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, identity_provider, VALID_TOKEN};
    use crate::tests::support::in_memory_store::InMemoryRecordStore;

    async fn put_work(store: &InMemoryRecordStore, id: &str, body: Value) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(identity_provider()))
                .service(resource_scope(ResourceKind::Work)),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/work/{id}"))
            .insert_header(bearer(VALID_TOKEN))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    fn seeded() -> InMemoryRecordStore {
        InMemoryRecordStore::new().with_rows(
            "work_experience",
            json!([{"id": 9, "company_name": "Acme", "role": "Dev", "end_date": "2020-01-01"}]),
        )
    }

    #[actix_web::test]
    async fn test_update_clears_empty_date_and_keeps_other_fields() {
        let store = seeded();

        let (status, body) = put_work(&store, "9", json!({"role": "Lead", "end_date": ""})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Work record updated successfully");
        assert_eq!(body["data"][0]["role"], "Lead");
        assert_eq!(body["data"][0]["end_date"], Value::Null);
        assert_eq!(body["data"][0]["company_name"], "Acme");
    }

    #[actix_web::test]
    async fn test_unknown_fields_only_is_bad_request() {
        let (status, body) = put_work(&seeded(), "9", json!({"logo": "\\x00"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No fields to update"}));
    }

    #[actix_web::test]
    async fn test_missing_record_is_not_found() {
        let (status, body) = put_work(&seeded(), "10", json!({"role": "Lead"})).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Work record not found"}));
    }
}
