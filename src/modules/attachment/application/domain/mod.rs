pub mod codec;
pub mod policies;
pub mod slot;
pub mod stored_blob;

pub use codec::{DecodeError, MimeType};
pub use policies::UploadPolicy;
pub use slot::{AttachmentSlot, SizeClass};
pub use stored_blob::StoredBlob;

/// One file part received from an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}
