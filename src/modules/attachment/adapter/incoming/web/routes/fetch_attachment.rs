use actix_web::{http::header, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::attachment::application::domain::AttachmentSlot;
use crate::modules::attachment::application::ports::incoming::use_cases::FetchAttachmentError;
use crate::modules::record::application::domain::RecordId;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

const FILE_NOT_FOUND: &str = "File not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    Inline,
    Attachment,
}

impl Disposition {
    fn as_str(self) -> &'static str {
        match self {
            Disposition::Inline => "inline",
            Disposition::Attachment => "attachment",
        }
    }
}

async fn serve(
    data: &AppState,
    slot: AttachmentSlot,
    raw_id: String,
    index: usize,
    disposition: Disposition,
) -> HttpResponse {
    let Ok(id) = RecordId::parse(&raw_id) else {
        return ApiResponse::not_found(&slot.kind.not_found_message());
    };

    match data.attachment.fetch.execute(slot, id, index).await {
        Ok(file) => HttpResponse::Ok()
            .content_type(file.mime.content_type())
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("{}; filename=\"{}\"", disposition.as_str(), file.file_name),
            ))
            .body(file.bytes),

        Err(FetchAttachmentError::NotFound(msg)) => ApiResponse::not_found(&msg),

        Err(e @ FetchAttachmentError::Corrupt) => {
            error!(resource = %slot.kind, column = slot.column, index, "Stored file is not valid hex");
            ApiResponse::upstream_error(&e.to_string())
        }

        Err(FetchAttachmentError::RepositoryError(msg)) => {
            error!(resource = %slot.kind, error = %msg, "Failed to fetch attachment");
            ApiResponse::upstream_error(&msg)
        }
    }
}

fn parse_index(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

/// Get a logo
#[utoipa::path(
    get,
    path = "/api/{resource}/{id}/logo",
    tag = "attachments",
    params(
        ("resource" = String, Path, description = "`education`, `work` or `projects`"),
        ("id" = String, Path, description = "Record id"),
    ),
    responses(
        (status = 200, description = "Logo bytes, served inline", content_type = "application/octet-stream"),
        (status = 404, description = "No record or no logo", body = ApiError),
        (status = 500, description = "Stored file is corrupt or the store failed", body = ApiError),
    )
)]
pub async fn get_logo_handler(
    slot: web::Data<AttachmentSlot>,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    serve(&data, *slot.get_ref(), path.into_inner(), 0, Disposition::Inline).await
}

/// Download one evidence file
#[utoipa::path(
    get,
    path = "/api/{resource}/{id}/download/{index}",
    tag = "attachments",
    params(
        ("resource" = String, Path, description = "`projects` or `e-portfolio`"),
        ("id" = String, Path, description = "Record id"),
        ("index" = usize, Path, description = "Zero-based file position"),
    ),
    responses(
        (status = 200, description = "File bytes as an attachment", content_type = "application/octet-stream"),
        (status = 404, description = "No record, or index out of range", body = ApiError),
        (status = 500, description = "Stored file is corrupt or the store failed", body = ApiError),
    )
)]
pub async fn download_attachment_handler(
    slot: web::Data<AttachmentSlot>,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (id, index) = path.into_inner();
    let Some(index) = parse_index(&index) else {
        return ApiResponse::not_found(FILE_NOT_FOUND);
    };
    serve(&data, *slot.get_ref(), id, index, Disposition::Attachment).await
}

/// Preview one evidence file inline
#[utoipa::path(
    get,
    path = "/api/{resource}/{id}/preview/{index}",
    tag = "attachments",
    params(
        ("resource" = String, Path, description = "`projects` or `e-portfolio`"),
        ("id" = String, Path, description = "Record id"),
        ("index" = usize, Path, description = "Zero-based file position"),
    ),
    responses(
        (status = 200, description = "File bytes, served inline", content_type = "application/octet-stream"),
        (status = 404, description = "No record, or index out of range", body = ApiError),
        (status = 500, description = "Stored file is corrupt or the store failed", body = ApiError),
    )
)]
pub async fn preview_attachment_handler(
    slot: web::Data<AttachmentSlot>,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (id, index) = path.into_inner();
    let Some(index) = parse_index(&index) else {
        return ApiResponse::not_found(FILE_NOT_FOUND);
    };
    serve(&data, *slot.get_ref(), id, index, Disposition::Inline).await
}
