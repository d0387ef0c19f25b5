use async_trait::async_trait;
use tracing::error;

use crate::modules::attachment::application::domain::codec::{self, MimeType};
use crate::modules::attachment::application::domain::{AttachmentSlot, StoredBlob};
use crate::modules::attachment::application::ports::incoming::use_cases::{
    AttachmentFile, FetchAttachmentError, FetchAttachmentUseCase,
};
use crate::modules::attachment::application::ports::outgoing::BlobBucket;
use crate::modules::record::application::domain::RecordId;
use crate::modules::record::application::ports::outgoing::{RecordStore, SelectQuery};

const FILE_NOT_FOUND: &str = "File not found";

pub struct FetchAttachmentService<S, B>
where
    S: RecordStore,
    B: BlobBucket,
{
    store: S,
    bucket: B,
}

impl<S, B> FetchAttachmentService<S, B>
where
    S: RecordStore,
    B: BlobBucket,
{
    pub fn new(store: S, bucket: B) -> Self {
        Self { store, bucket }
    }

    async fn from_bucket(
        &self,
        slot: &AttachmentSlot,
        id: &RecordId,
        index: usize,
    ) -> Result<Vec<u8>, FetchAttachmentError> {
        self.bucket
            .get(&slot.bucket_path(id, index))
            .await
            .map_err(|e| FetchAttachmentError::RepositoryError(e.to_string()))?
            .ok_or_else(|| FetchAttachmentError::NotFound(FILE_NOT_FOUND.to_string()))
    }
}

#[async_trait]
impl<S, B> FetchAttachmentUseCase for FetchAttachmentService<S, B>
where
    S: RecordStore,
    B: BlobBucket,
{
    async fn execute(
        &self,
        slot: AttachmentSlot,
        id: RecordId,
        index: usize,
    ) -> Result<AttachmentFile, FetchAttachmentError> {
        let record = self
            .store
            .select(slot.kind.table(), &SelectQuery::by_id(id.clone()))
            .await
            .map_err(|e| FetchAttachmentError::RepositoryError(e.to_string()))?
            .into_iter()
            .next()
            .ok_or_else(|| FetchAttachmentError::NotFound(slot.kind.not_found_message()))?;

        let stored = record.get(slot.column).and_then(StoredBlob::from_value);
        let bytes = match stored {
            Some(StoredBlob::Malformed) => {
                error!(resource = %slot.kind, id = %id, "Blob column holds non-text items");
                return Err(FetchAttachmentError::Corrupt);
            }
            Some(blob) => {
                let encoded = blob
                    .get(index)
                    .ok_or_else(|| FetchAttachmentError::NotFound(FILE_NOT_FOUND.to_string()))?;
                codec::decode(encoded).map_err(|e| {
                    error!(resource = %slot.kind, id = %id, error = %e, "Undecodable blob");
                    FetchAttachmentError::Corrupt
                })?
            }
            None => self.from_bucket(&slot, &id, index).await?,
        };

        let mime = MimeType::sniff(&bytes);
        Ok(AttachmentFile {
            file_name: slot.file_name(&id, index, mime.extension()),
            mime,
            bytes,
        })
    }
}
