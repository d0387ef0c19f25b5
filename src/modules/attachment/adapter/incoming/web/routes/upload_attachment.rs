use actix_multipart::Multipart;
use actix_web::{web, Responder};
use futures::TryStreamExt;
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::attachment::application::domain::{AttachmentSlot, UploadedFile};
use crate::modules::attachment::application::ports::incoming::use_cases::{
    StorageLocation, UploadAttachmentError,
};
use crate::modules::record::application::domain::RecordId;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    pub files: usize,
    #[schema(value_type = String, example = "record")]
    pub storage: StorageLocation,
}

#[derive(Debug, thiserror::Error)]
enum MultipartReadError {
    #[error("Invalid multipart payload: {0}")]
    Malformed(String),

    #[error("File exceeds the maximum size of {limit} bytes")]
    TooLarge { limit: usize },
}

/// Collects every part carrying a filename, stopping as soon as one grows past `limit`.
/// A part with an empty filename and no content is a file input left blank.
async fn read_files(
    mut payload: Multipart,
    limit: usize,
) -> Result<Vec<UploadedFile>, MultipartReadError> {
    let mut files = Vec::new();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| MultipartReadError::Malformed(e.to_string()))?
    {
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| MultipartReadError::Malformed(e.to_string()))?
        {
            if bytes.len() + chunk.len() > limit {
                return Err(MultipartReadError::TooLarge { limit });
            }
            bytes.extend_from_slice(&chunk);
        }

        match file_name {
            Some(name) if name.is_empty() && bytes.is_empty() => {}
            Some(name) => files.push(UploadedFile {
                file_name: Some(name),
                bytes,
            }),
            None => {}
        }
    }

    Ok(files)
}

/// Upload files into an attachment slot
///
/// Replaces whatever the slot held before.
#[utoipa::path(
    post,
    path = "/api/{resource}/{id}/upload",
    tag = "attachments",
    params(
        ("resource" = String, Path, description = "`projects` or `e-portfolio`; logo slots use `/logo`"),
        ("id" = String, Path, description = "Record id"),
    ),
    request_body(content_type = "multipart/form-data", description = "One or more file parts"),
    responses(
        (status = 200, description = "Files stored", body = UploadResponse),
        (status = 400, description = "No file, or several files for a logo", body = ApiError),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 404, description = "No record with that id", body = ApiError),
        (status = 413, description = "A file exceeds the size cap", body = ApiError),
        (status = 500, description = "Record store or storage failure", body = ApiError),
    ),
    security(("BearerAuth" = []))
)]
pub async fn upload_attachment_handler(
    _user: AuthenticatedUser,
    slot: web::Data<AttachmentSlot>,
    path: web::Path<String>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let slot = *slot.get_ref();
    let Ok(id) = RecordId::parse(&path.into_inner()) else {
        return ApiResponse::not_found(&slot.kind.not_found_message());
    };

    let limit = data.attachment.policy.limit_for(slot.class);
    let files = match read_files(payload, limit).await {
        Ok(files) => files,
        Err(e @ MultipartReadError::TooLarge { .. }) => {
            warn!(resource = %slot.kind, id = %id, "Upload rejected: {}", e);
            return ApiResponse::payload_too_large(&e.to_string());
        }
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.attachment.upload.execute(slot, id, files).await {
        Ok(outcome) => {
            let message = if outcome.files == 1 {
                "File uploaded successfully"
            } else {
                "Files uploaded successfully"
            };
            ApiResponse::success(UploadResponse {
                message: message.to_string(),
                files: outcome.files,
                storage: outcome.storage,
            })
        }

        Err(e @ (UploadAttachmentError::NoFiles | UploadAttachmentError::TooManyFiles)) => {
            ApiResponse::bad_request(&e.to_string())
        }

        Err(e @ UploadAttachmentError::PayloadTooLarge { .. }) => {
            ApiResponse::payload_too_large(&e.to_string())
        }

        Err(UploadAttachmentError::NotFound(msg)) => ApiResponse::not_found(&msg),

        Err(UploadAttachmentError::RepositoryError(msg)) => {
            error!(resource = %slot.kind, column = slot.column, error = %msg, "Upload failed");
            ApiResponse::upstream_error(&msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    use crate::modules::attachment::adapter::incoming::web::routes::configure_attachment_routes;
    use crate::modules::record::adapter::incoming::web::routes::resource_scope;
    use crate::modules::record::application::domain::ResourceKind;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, identity_provider, VALID_TOKEN};
    use crate::tests::support::in_memory_bucket::InMemoryBucket;
    use crate::tests::support::in_memory_store::InMemoryRecordStore;
    use crate::tests::support::multipart::multipart_body;

    async fn upload(
        store: &InMemoryRecordStore,
        bucket: &InMemoryBucket,
        kind: ResourceKind,
        uri: &str,
        token: Option<&str>,
        parts: &[(&str, Option<&str>, &[u8])],
    ) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .with_bucket(bucket.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(identity_provider()))
                .service(
                    resource_scope(kind).configure(|cfg| configure_attachment_routes(cfg, kind)),
                ),
        )
        .await;

        let (content_type, body) = multipart_body(parts);
        let mut req = test::TestRequest::post()
            .uri(uri)
            .insert_header(("Content-Type", content_type))
            .set_payload(body);
        if let Some(token) = token {
            req = req.insert_header(bearer(token));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_logo_upload_stores_hex_in_record() {
        let store = InMemoryRecordStore::new().with_rows("education", json!([{"id": 1}]));
        let bucket = InMemoryBucket::new();

        let (status, body) = upload(
            &store,
            &bucket,
            ResourceKind::Education,
            "/api/education/1/logo",
            Some(VALID_TOKEN),
            &[("file", Some("logo.png"), b"\x89PNG")],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"message": "File uploaded successfully", "files": 1, "storage": "record"})
        );
        assert_eq!(store.rows("education")[0]["logo"], "\\x89504e47");
    }

    #[actix_web::test]
    async fn test_oversized_logo_is_413_without_store_call() {
        let store = InMemoryRecordStore::new().with_rows("work_experience", json!([{"id": 1}]));
        let bucket = InMemoryBucket::new();
        let three_mib = vec![7u8; 3 * 1024 * 1024];

        let (status, body) = upload(
            &store,
            &bucket,
            ResourceKind::Work,
            "/api/work/1/logo",
            Some(VALID_TOKEN),
            &[("file", Some("big.png"), three_mib.as_slice())],
        )
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body,
            json!({"error": "File exceeds the maximum size of 2097152 bytes"})
        );
        assert_eq!(store.write_calls(), 0);
    }

    #[actix_web::test]
    async fn test_evidence_upload_keeps_every_file_part() {
        let store = InMemoryRecordStore::new().with_rows("e_portfolio", json!([{"id": 5}]));
        let bucket = InMemoryBucket::new();

        let (status, body) = upload(
            &store,
            &bucket,
            ResourceKind::EPortfolio,
            "/api/e-portfolio/5/upload",
            Some(VALID_TOKEN),
            &[
                ("note", None, b"ignored text field"),
                ("files", Some("a.pdf"), b"%PDF-a"),
                ("files", Some("b.pdf"), b"%PDF-b"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["files"], 2);
        assert_eq!(
            store.rows("e_portfolio")[0]["evidence_file"]
                .as_array()
                .map(Vec::len),
            Some(2)
        );
    }

    #[actix_web::test]
    async fn test_second_file_for_a_logo_is_rejected() {
        let store = InMemoryRecordStore::new().with_rows("other_information", json!([{"id": 1}]));
        let bucket = InMemoryBucket::new();

        let (status, body) = upload(
            &store,
            &bucket,
            ResourceKind::Projects,
            "/api/projects/1/logo",
            Some(VALID_TOKEN),
            &[
                ("file", Some("a.png"), b"\x89PNG"),
                ("file", Some("b.png"), b"\x89PNG"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Only one file may be uploaded"}));
    }

    #[actix_web::test]
    async fn test_upload_without_files_is_400() {
        let store = InMemoryRecordStore::new().with_rows("other_information", json!([{"id": 1}]));
        let bucket = InMemoryBucket::new();

        let (status, body) = upload(
            &store,
            &bucket,
            ResourceKind::Projects,
            "/api/projects/1/upload",
            Some(VALID_TOKEN),
            &[("note", None, b"no file here")],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No files uploaded"}));
    }

    #[actix_web::test]
    async fn test_blank_file_input_does_not_replace_the_logo() {
        let store = InMemoryRecordStore::new()
            .with_rows("education", json!([{"id": 1, "logo": "\\x89504e47"}]));
        let bucket = InMemoryBucket::new();

        let (status, body) = upload(
            &store,
            &bucket,
            ResourceKind::Education,
            "/api/education/1/logo",
            Some(VALID_TOKEN),
            &[("file", Some(""), b"")],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No files uploaded"}));
        assert_eq!(store.rows("education")[0]["logo"], "\\x89504e47");
        assert_eq!(store.write_calls(), 0);
    }

    #[actix_web::test]
    async fn test_bucket_reupload_with_fewer_files_hides_the_old_extra_file() {
        let store = InMemoryRecordStore::new().with_rows("e_portfolio", json!([{"id": 4}]));
        store.forget_column("e_portfolio", "evidence_file");
        let bucket = InMemoryBucket::new();

        let (first, _) = upload(
            &store,
            &bucket,
            ResourceKind::EPortfolio,
            "/api/e-portfolio/4/upload",
            Some(VALID_TOKEN),
            &[
                ("files", Some("a.pdf"), b"%PDF-a"),
                ("files", Some("b.pdf"), b"%PDF-b"),
            ],
        )
        .await;
        let (second, _) = upload(
            &store,
            &bucket,
            ResourceKind::EPortfolio,
            "/api/e-portfolio/4/upload",
            Some(VALID_TOKEN),
            &[("files", Some("c.pdf"), b"%PDF-c")],
        )
        .await;
        assert_eq!(first, StatusCode::OK);
        assert_eq!(second, StatusCode::OK);

        let state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .with_bucket(bucket.clone())
            .build();
        let kind = ResourceKind::EPortfolio;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(identity_provider()))
                .service(
                    resource_scope(kind).configure(|cfg| configure_attachment_routes(cfg, kind)),
                ),
        )
        .await;

        let kept = test::TestRequest::get()
            .uri("/api/e-portfolio/4/download/0")
            .to_request();
        let kept = test::call_service(&app, kept).await;
        assert_eq!(kept.status(), StatusCode::OK);
        assert_eq!(test::read_body(kept).await.as_ref(), b"%PDF-c");

        let stale = test::TestRequest::get()
            .uri("/api/e-portfolio/4/download/1")
            .to_request();
        let stale = test::call_service(&app, stale).await;
        assert_eq!(stale.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_upload_requires_a_bearer_token() {
        let store = InMemoryRecordStore::new().with_rows("education", json!([{"id": 1}]));
        let bucket = InMemoryBucket::new();

        let (status, body) = upload(
            &store,
            &bucket,
            ResourceKind::Education,
            "/api/education/1/logo",
            None,
            &[("file", Some("logo.png"), b"\x89PNG")],
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({"error": "Missing or invalid authorization header"})
        );
        assert_eq!(store.write_calls(), 0);
    }

    #[actix_web::test]
    async fn test_bucket_fallback_is_reported() {
        let store = InMemoryRecordStore::new().with_rows("other_information", json!([{"id": 9}]));
        store.forget_column("other_information", "files");
        let bucket = InMemoryBucket::new();

        let (status, body) = upload(
            &store,
            &bucket,
            ResourceKind::Projects,
            "/api/projects/9/upload",
            Some(VALID_TOKEN),
            &[("files", Some("a.gif"), b"GIF89a")],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["storage"], "bucket");
        assert!(bucket.object("other_information/9/files/0").is_some());
    }
}
