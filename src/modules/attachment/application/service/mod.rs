mod fetch_attachment_service;
mod upload_attachment_service;

pub use fetch_attachment_service::FetchAttachmentService;
pub use upload_attachment_service::UploadAttachmentService;
