use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::attachment::application::domain::codec::{self, MimeType};
use crate::modules::attachment::application::domain::{
    AttachmentSlot, StoredBlob, UploadPolicy, UploadedFile,
};
use crate::modules::attachment::application::ports::incoming::use_cases::{
    StorageLocation, UploadAttachmentError, UploadAttachmentUseCase, UploadOutcome,
};
use crate::modules::attachment::application::ports::outgoing::BlobBucket;
use crate::modules::record::application::domain::{Record, RecordId};
use crate::modules::record::application::ports::outgoing::{
    RecordStore, RecordStoreError, SelectQuery,
};

pub struct UploadAttachmentService<S, B>
where
    S: RecordStore,
    B: BlobBucket,
{
    store: S,
    bucket: B,
    policy: UploadPolicy,
}

impl<S, B> UploadAttachmentService<S, B>
where
    S: RecordStore,
    B: BlobBucket,
{
    pub fn new(store: S, bucket: B, policy: UploadPolicy) -> Self {
        Self {
            store,
            bucket,
            policy,
        }
    }

    fn check(
        &self,
        slot: &AttachmentSlot,
        files: &[UploadedFile],
    ) -> Result<(), UploadAttachmentError> {
        if files.is_empty() {
            return Err(UploadAttachmentError::NoFiles);
        }
        if files.len() > 1 && !slot.accepts_many() {
            return Err(UploadAttachmentError::TooManyFiles);
        }

        let limit = self.policy.limit_for(slot.class);
        if files.iter().any(|file| file.bytes.len() > limit) {
            return Err(UploadAttachmentError::PayloadTooLarge { limit });
        }
        Ok(())
    }

    /// Used when the store does not know the slot's column. Objects past the
    /// new file count are removed so the slot holds only this upload.
    async fn write_to_bucket(
        &self,
        slot: &AttachmentSlot,
        id: &RecordId,
        files: Vec<UploadedFile>,
    ) -> Result<(), UploadAttachmentError> {
        let exists = self
            .store
            .select(slot.kind.table(), &SelectQuery::by_id(id.clone()))
            .await
            .map_err(|e| UploadAttachmentError::RepositoryError(e.to_string()))?;
        if exists.is_empty() {
            return Err(UploadAttachmentError::NotFound(slot.kind.not_found_message()));
        }

        let count = files.len();
        for (index, file) in files.into_iter().enumerate() {
            let content_type = MimeType::sniff(&file.bytes).content_type();
            self.bucket
                .put(&slot.bucket_path(id, index), file.bytes, content_type)
                .await
                .map_err(|e| UploadAttachmentError::RepositoryError(e.to_string()))?;
        }

        // uploads always fill indices 0..n, so the first gap ends the stale run
        let mut index = count;
        while self
            .bucket
            .delete(&slot.bucket_path(id, index))
            .await
            .map_err(|e| UploadAttachmentError::RepositoryError(e.to_string()))?
        {
            index += 1;
        }
        if index > count {
            info!(
                resource = %slot.kind,
                id = %id,
                removed = index - count,
                "Stale bucket objects removed"
            );
        }
        Ok(())
    }
}

#[async_trait]
impl<S, B> UploadAttachmentUseCase for UploadAttachmentService<S, B>
where
    S: RecordStore,
    B: BlobBucket,
{
    async fn execute(
        &self,
        slot: AttachmentSlot,
        id: RecordId,
        files: Vec<UploadedFile>,
    ) -> Result<UploadOutcome, UploadAttachmentError> {
        self.check(&slot, &files)?;

        let count = files.len();
        let encoded: Vec<String> = files.iter().map(|f| codec::encode(&f.bytes)).collect();
        let Some(blob) = StoredBlob::from_encoded(encoded) else {
            return Err(UploadAttachmentError::NoFiles);
        };

        let mut changes = Record::new();
        changes.insert(slot.column.to_string(), blob.into_value());

        let storage = match self.store.update(slot.kind.table(), &id, changes).await {
            Ok(rows) if rows.is_empty() => {
                return Err(UploadAttachmentError::NotFound(slot.kind.not_found_message()));
            }
            Ok(_) => StorageLocation::Record,
            Err(RecordStoreError::SchemaCache(reason)) => {
                warn!(
                    resource = %slot.kind,
                    column = slot.column,
                    reason = %reason,
                    "Column unavailable, writing upload to the storage bucket"
                );
                self.write_to_bucket(&slot, &id, files).await?;
                StorageLocation::Bucket
            }
            Err(e) => return Err(UploadAttachmentError::RepositoryError(e.to_string())),
        };

        info!(
            resource = %slot.kind,
            id = %id,
            column = slot.column,
            files = count,
            "Upload stored"
        );
        Ok(UploadOutcome {
            files: count,
            storage,
        })
    }
}
