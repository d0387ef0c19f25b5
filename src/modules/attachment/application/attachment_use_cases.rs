use std::sync::Arc;

use crate::modules::attachment::application::domain::UploadPolicy;
use crate::modules::attachment::application::ports::incoming::use_cases::{
    FetchAttachmentUseCase, UploadAttachmentUseCase,
};

#[derive(Clone)]
pub struct AttachmentUseCases {
    pub upload: Arc<dyn UploadAttachmentUseCase + Send + Sync>,
    pub fetch: Arc<dyn FetchAttachmentUseCase + Send + Sync>,
    /// Also read by the multipart reader to stop oversized parts early.
    pub policy: UploadPolicy,
}
