mod fetch_attachment;
mod upload_attachment;

pub use fetch_attachment::{AttachmentFile, FetchAttachmentError, FetchAttachmentUseCase};
pub use upload_attachment::{
    StorageLocation, UploadAttachmentError, UploadAttachmentUseCase, UploadOutcome,
};
